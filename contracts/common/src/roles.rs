use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLE");
const ADMIN: Symbol = symbol_short!("ADMIN");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Operational roles with distinct permission domains.
///
/// - `Admin` – Set once at construction; may grant and revoke the other
///             roles. The admin address also receives `Cfo` and `Cmo`
///             at initialization, so it can exercise every gated path.
/// - `Cfo`   – Financial-risk levers: fees, burn switch, base stake
///             minimums, thawing period, earning caps, fee withdrawal.
/// - `Cmo`   – Marketing levers: the whitelist, boost-item prices, and
///             reward-candidate approval.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 1,
    Cfo = 2,
    Cmo = 3,
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(role: &Role, who: &Address) -> (Symbol, Role, Address) {
    (ROLE_PREFIX, role.clone(), who.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Role, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Grants `role` to the given address.
/// Only callable internally — callers must verify authorization beforehand.
pub fn grant_role(env: &Env, role: &Role, who: &Address) {
    let key = role_key(role, who);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

/// Revokes `role` from the given address. Revoking an absent role is a no-op.
pub fn revoke_role(env: &Env, role: &Role, who: &Address) {
    let key = role_key(role, who);
    env.storage().persistent().remove(&key);
}

/// Returns true if the address currently holds `role`.
pub fn has_role(env: &Env, role: &Role, who: &Address) -> bool {
    let key = role_key(role, who);
    let held: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if held {
        extend_ttl(env, &key);
    }
    held
}

// ── Admin Registry ───────────────────────────────────────────────────────────

/// Records the primary admin during contract initialization and grants it
/// the `Admin` role.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
    grant_role(env, &Role::Admin, admin);
}

/// Returns the primary admin address, if set.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn role_discriminants_are_stable() {
        assert_eq!(Role::Admin as u32, 1);
        assert_eq!(Role::Cfo as u32, 2);
        assert_eq!(Role::Cmo as u32, 3);
    }
}
