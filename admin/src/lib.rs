#![no_std]

multiversx_sc::imports!();

pub const ERROR_ONLY_ADMIN: &str = "only admin can perform this action";
pub const ERROR_ONLY_PENDING_ADMIN: &str = "only the pending admin can accept the admin role";
pub const ERROR_NO_PENDING_ADMIN: &str = "there is no pending admin";
pub const ERROR_ADMIN_NOT_SET: &str = "admin has not been set";

/// Admin Module
///
/// Implements a two-step admin handoff: the current admin proposes a pending admin, which must then accept the role
/// explicitly. Until the pending admin accepts, the current admin keeps every privilege.
///
#[multiversx_sc::module]
pub trait AdminModule {
    // Events

    /// Emitted when a new pending admin is proposed.
    #[event("new_pending_admin_event")]
    fn new_pending_admin_event(&self, #[indexed] pending_admin: &ManagedAddress);

    /// Emitted when the pending admin accepts the admin role.
    #[event("new_admin_event")]
    fn new_admin_event(&self, #[indexed] old_admin: &ManagedAddress, #[indexed] new_admin: &ManagedAddress);

    // Endpoints

    /// Proposes a new admin. The proposal can be overwritten at any time by the current admin.
    ///
    /// # Arguments:
    ///
    /// - `pending_admin` - The address of the proposed admin.
    ///
    #[endpoint(setPendingAdmin)]
    fn set_pending_admin(&self, pending_admin: ManagedAddress) {
        self.require_admin();
        self.pending_admin().set(&pending_admin);
        self.new_pending_admin_event(&pending_admin);
    }

    /// Accepts the admin role. Can only be called by the pending admin.
    ///
    #[endpoint(acceptAdmin)]
    fn accept_admin(&self) {
        require!(!self.pending_admin().is_empty(), ERROR_NO_PENDING_ADMIN);

        let caller = self.blockchain().get_caller();
        let pending_admin = self.pending_admin().get();
        require!(caller == pending_admin, ERROR_ONLY_PENDING_ADMIN);

        let old_admin = self.get_admin();
        self.admin().set(&pending_admin);
        self.pending_admin().clear();

        self.new_admin_event(&old_admin, &pending_admin);
    }

    // Helpers

    /// Sets the admin iff it has not been set before. Defaults to the caller (i.e. the deployer).
    ///
    /// # Arguments:
    ///
    /// - `opt_admin` - An optional admin address.
    ///
    fn try_set_admin(&self, opt_admin: OptionalValue<ManagedAddress>) {
        if !self.admin().is_empty() {
            return;
        }

        let admin = match opt_admin {
            OptionalValue::Some(admin) => admin,
            OptionalValue::None => self.blockchain().get_caller(),
        };

        self.admin().set(&admin);
        self.new_admin_event(&ManagedAddress::zero(), &admin);
    }

    fn get_admin(&self) -> ManagedAddress {
        require!(!self.admin().is_empty(), ERROR_ADMIN_NOT_SET);
        self.admin().get()
    }

    fn is_admin(&self, address: &ManagedAddress) -> bool {
        !self.admin().is_empty() && &self.admin().get() == address
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), ERROR_ONLY_ADMIN);
    }

    // Storage

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPendingAdmin)]
    #[storage_mapper("pending_admin")]
    fn pending_admin(&self) -> SingleValueMapper<ManagedAddress>;
}
