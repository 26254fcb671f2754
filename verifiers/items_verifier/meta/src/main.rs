fn main() {
    multiversx_sc_meta_lib::cli_main::<items_verifier::AbiProvider>();
}
