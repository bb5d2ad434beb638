#![allow(deprecated)] // events().publish migration tracked separately

use common::roles::Role;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{BoostLevel, StakeTier};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub cfo: Address,
    pub cmo: Address,
    pub timestamp: u64,
}

/// Fired when the admin grants or revokes a role.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub target: Address,
    pub granted: bool,
    pub timestamp: u64,
}

/// Fired when an address is added to the whitelist.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistedEvent {
    pub user: Address,
    pub timestamp: u64,
}

/// Fired when a role holder updates a fee-config field.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEvent {
    pub field: Symbol,
    pub timestamp: u64,
}

/// Fired when a user deposits into a stake pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub tier: StakeTier,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws from a stake pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeWithdrawnEvent {
    pub staker: Address,
    pub tier: StakeTier,
    pub amount: i128,
    pub fee: i128,
    pub timestamp: u64,
}

/// Fired once per `batch_add_reward_candidates` call.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardCandidatesAddedEvent {
    pub count: u32,
    pub total_amount: i128,
    pub timestamp: u64,
}

/// Fired when a user moves their reward candidate into thawing.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThawingStartedEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a user claims a thawed reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub user: Address,
    pub amount: i128,
    pub fee: i128,
    pub timestamp: u64,
}

/// Fired when a user freezes a thawing reward into their earn stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardFrozenEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a user cancels a thaw, returning the balance to candidate state.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThawingCancelledEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a user purchases a boost item.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoostPurchasedEvent {
    pub buyer: Address,
    pub level: BoostLevel,
    pub price: i128,
    pub timestamp: u64,
}

/// Fired when accumulated commission is withdrawn.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
    pub burned: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, token: Address, cfo: Address, cmo: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            token,
            cfo,
            cmo,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_changed(env: &Env, role: Role, target: Address, granted: bool) {
    env.events().publish(
        (symbol_short!("ROLE_CHG"), target.clone()),
        RoleChangedEvent {
            role,
            target,
            granted,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_whitelisted(env: &Env, user: Address) {
    env.events().publish(
        (symbol_short!("WLISTED"), user.clone()),
        WhitelistedEvent {
            user,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_config_updated(env: &Env, field: Symbol) {
    env.events().publish(
        (symbol_short!("CFG_SET"), field.clone()),
        ConfigUpdatedEvent {
            field,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, tier: StakeTier, amount: i128, new_balance: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            tier,
            amount,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_withdrawn(
    env: &Env,
    staker: Address,
    tier: StakeTier,
    amount: i128,
    fee: i128,
) {
    env.events().publish(
        (symbol_short!("STK_WDRN"), staker.clone()),
        StakeWithdrawnEvent {
            staker,
            tier,
            amount,
            fee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_candidates_added(env: &Env, count: u32, total_amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_CAND"),),
        RewardCandidatesAddedEvent {
            count,
            total_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_thawing_started(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("THAW_STRT"), user.clone()),
        ThawingStartedEvent {
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, user: Address, amount: i128, fee: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), user.clone()),
        RewardClaimedEvent {
            user,
            amount,
            fee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_frozen(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("FROZEN"), user.clone()),
        RewardFrozenEvent {
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_thawing_cancelled(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("THAW_CNCL"), user.clone()),
        ThawingCancelledEvent {
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_boost_purchased(env: &Env, buyer: Address, level: BoostLevel, price: i128) {
    env.events().publish(
        (symbol_short!("BOOST"), buyer.clone()),
        BoostPurchasedEvent {
            buyer,
            level,
            price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fee_withdrawn(env: &Env, to: Address, amount: i128, burned: i128) {
    env.events().publish(
        (symbol_short!("FEE_WDRN"), to.clone()),
        FeeWithdrawnEvent {
            to,
            amount,
            burned,
            timestamp: env.ledger().timestamp(),
        },
    );
}
