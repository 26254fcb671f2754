use common_structs::Loan;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The origination controller, the only caller allowed to mutate loans.
    #[view(getController)]
    #[storage_mapper("controller_address")]
    fn controller_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFeeControllerAddress)]
    #[storage_mapper("fee_controller_address")]
    fn fee_controller_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Borrower-side note collection, one NFT minted per loan.
    #[view(getBorrowerNoteToken)]
    #[storage_mapper("borrower_note")]
    fn borrower_note(&self) -> NonFungibleTokenMapper<Self::Api>;

    /// Lender-side note collection, one NFT minted per loan.
    #[view(getLenderNoteToken)]
    #[storage_mapper("lender_note")]
    fn lender_note(&self) -> NonFungibleTokenMapper<Self::Api>;

    /// Monotonically increasing loan id counter. Ids start at 1.
    #[view(getLastLoanId)]
    #[storage_mapper("last_loan_id")]
    fn last_loan_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("loans")]
    fn loans(&self, loan_id: u64) -> SingleValueMapper<Loan<Self::Api>>;

    /// Escrowed fungible balances per (account, currency). Lenders fund
    /// borrower-initiated originations out of these.
    #[view(getFundsEscrow)]
    #[storage_mapper("funds_escrow")]
    fn funds_escrow(
        &self,
        account: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Owner of an escrowed (not yet pledged) collateral token.
    #[view(getCollateralOwner)]
    #[storage_mapper("collateral_owner")]
    fn collateral_owner(
        &self,
        token: &TokenIdentifier,
        nonce: u64,
    ) -> SingleValueMapper<ManagedAddress>;

    /// Standing authorization for the controller to pledge an escrowed
    /// collateral on the owner's behalf.
    #[view(isCollateralAuthorized)]
    #[storage_mapper("collateral_authorized")]
    fn collateral_authorized(
        &self,
        token: &TokenIdentifier,
        nonce: u64,
    ) -> SingleValueMapper<bool>;

    /// Loan id currently holding a collateral in custody; empty when free.
    #[view(getCollateralLock)]
    #[storage_mapper("collateral_locked")]
    fn collateral_locked(&self, token: &TokenIdentifier, nonce: u64) -> SingleValueMapper<u64>;

    /// Withdrawable protocol fee revenue per currency.
    #[view(getProtocolFees)]
    #[storage_mapper("protocol_fees")]
    fn protocol_fees(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Withdrawable affiliate fee revenue per (affiliate, currency).
    #[view(getAffiliateFees)]
    #[storage_mapper("affiliate_fees")]
    fn affiliate_fees(
        &self,
        affiliate: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Consumed collateral-permit nonces per owner; each permit is
    /// single-use.
    #[storage_mapper("used_permit_nonces")]
    fn used_permit_nonces(&self, owner: &ManagedAddress) -> UnorderedSetMapper<u64>;
}
