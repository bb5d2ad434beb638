#![no_std]

pub mod events;
pub mod fees;

use common::roles::{self, Role};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");
const CONFIG: Symbol = symbol_short!("CONFIG");
const STATS: Symbol = symbol_short!("STATS");

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const WHITELIST: Symbol = symbol_short!("WLIST");
const PLAY_STAKE: Symbol = symbol_short!("PLAY_STK");
const EARN_STAKE: Symbol = symbol_short!("EARN_STK");
const REWARD: Symbol = symbol_short!("REWARD");
const THAWING: Symbol = symbol_short!("THAWING");
const BOOST: Symbol = symbol_short!("BOOST");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotWhitelisted = 4,
    InvalidAmount = 5,
    BelowMinimum = 6,
    InsufficientStake = 7,
    InsufficientCommission = 8,
    LengthMismatch = 9,
    NoRewardCandidate = 10,
    NotThawing = 11,
    AlreadyThawing = 12,
    ThawingNotElapsed = 13,
    AlreadyHoldingBoost = 14,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// The two stake pools a user may deposit into.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakeTier {
    Play = 1,
    Earn = 2,
}

/// Mutually exclusive boost-item tiers. Level numbering follows the game
/// client: 1 is the most expensive item.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum BoostLevel {
    Gold = 1,
    Silver = 2,
    Bronze = 3,
}

/// Operator-controlled economic parameters, held as a single instance record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    /// Basis points burned out of every commission withdrawal when
    /// `burn_enabled` is set.
    pub burn_fee_bps: u32,
    /// Basis points charged on stake withdrawals and reward claims.
    pub withdraw_fee_bps: u32,
    pub burn_enabled: bool,
    /// Minimum deposit to open a play-stake position.
    pub base_stake_for_play: i128,
    /// Minimum deposit to open an earn-stake position.
    pub base_stake_for_earn: i128,
    /// Seconds a reward must thaw before it can be claimed.
    pub thawing_period: u64,
    pub max_user_earning_per_day: i128,
    pub gold_price: i128,
    pub silver_price: i128,
    pub bronze_price: i128,
}

/// Reward granted by an operator but not yet thawing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardState {
    pub approved_amount: i128,
}

/// A thaw in progress. `status` is true iff `approved_amount` is pending;
/// exactly one of claim, freeze, or cancel may consume it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThawingState {
    pub approved_amount: i128,
    pub status: bool,
    pub started_at: u64,
}

/// Aggregate fee accounting. Both counters are monotone and
/// `total_commission_withdrawn` never exceeds `total_commission`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommissionStats {
    pub total_commission: i128,
    pub total_commission_withdrawn: i128,
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn require_initialized(env: &Env) -> Result<(), ContractError> {
    if !env.storage().instance().has(&INITIALIZED) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

/// Guard: revert unless `caller` holds `role`.
fn require_role(env: &Env, caller: &Address, role: &Role) -> Result<(), ContractError> {
    if !roles::has_role(env, role, caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Guard for the commission drain: the admin or the CFO may withdraw fees.
fn require_admin_or_cfo(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if roles::has_role(env, &Role::Admin, caller) || roles::has_role(env, &Role::Cfo, caller) {
        return Ok(());
    }
    Err(ContractError::Unauthorized)
}

fn load_config(env: &Env) -> Result<FeeConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

fn save_config(env: &Env, cfg: &FeeConfig) {
    env.storage().instance().set(&CONFIG, cfg);
}

fn load_stats(env: &Env) -> CommissionStats {
    env.storage().instance().get(&STATS).unwrap_or(CommissionStats {
        total_commission: 0,
        total_commission_withdrawn: 0,
    })
}

fn save_stats(env: &Env, stats: &CommissionStats) {
    env.storage().instance().set(&STATS, stats);
}

fn token_address(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&TOKEN)
        .ok_or(ContractError::NotInitialized)
}

fn bump(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn whitelisted(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&(WHITELIST, user.clone()))
        .unwrap_or(false)
}

fn add_whitelisted(env: &Env, user: &Address) {
    let key = (WHITELIST, user.clone());
    // Idempotent: re-adding only refreshes the entry.
    env.storage().persistent().set(&key, &true);
    bump(env, &key);
    events::publish_whitelisted(env, user.clone());
}

fn stake_key(tier: &StakeTier, user: &Address) -> (Symbol, Address) {
    match tier {
        StakeTier::Play => (PLAY_STAKE, user.clone()),
        StakeTier::Earn => (EARN_STAKE, user.clone()),
    }
}

fn read_stake(env: &Env, tier: &StakeTier, user: &Address) -> i128 {
    env.storage().persistent().get(&stake_key(tier, user)).unwrap_or(0)
}

fn write_stake(env: &Env, tier: &StakeTier, user: &Address, balance: i128) {
    let key = stake_key(tier, user);
    env.storage().persistent().set(&key, &balance);
    bump(env, &key);
}

fn read_reward(env: &Env, user: &Address) -> RewardState {
    env.storage()
        .persistent()
        .get(&(REWARD, user.clone()))
        .unwrap_or(RewardState { approved_amount: 0 })
}

fn write_reward(env: &Env, user: &Address, state: &RewardState) {
    let key = (REWARD, user.clone());
    env.storage().persistent().set(&key, state);
    bump(env, &key);
}

fn read_thawing(env: &Env, user: &Address) -> ThawingState {
    env.storage()
        .persistent()
        .get(&(THAWING, user.clone()))
        .unwrap_or(ThawingState {
            approved_amount: 0,
            status: false,
            started_at: 0,
        })
}

fn write_thawing(env: &Env, user: &Address, state: &ThawingState) {
    let key = (THAWING, user.clone());
    env.storage().persistent().set(&key, state);
    bump(env, &key);
}

/// Shared body of every fee-config setter: auth, role check, mutate, event.
fn update_config<F>(
    env: &Env,
    caller: &Address,
    role: &Role,
    field: Symbol,
    apply: F,
) -> Result<(), ContractError>
where
    F: FnOnce(&mut FeeConfig),
{
    require_initialized(env)?;
    caller.require_auth();
    require_role(env, caller, role)?;

    let mut cfg = load_config(env)?;
    apply(&mut cfg);
    save_config(env, &cfg);

    events::publish_config_updated(env, field);
    Ok(())
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct GameFactory;

#[contractimpl]
impl GameFactory {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `admin` – Privileged address; receives Admin plus both operator
    ///             roles so it can exercise every gated path.
    /// * `token` – Address of the game-economy token contract.
    /// * `cfo`   – Initial holder of the CFO role.
    /// * `cmo`   – Initial holder of the CMO role.
    ///
    /// Fee defaults start at 500 bps (5%) for both the withdraw fee and the
    /// burn fee, with burning disabled; everything else starts at zero.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        cfo: Address,
        cmo: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&TOKEN, &token);

        roles::set_admin(&env, &admin);
        roles::grant_role(&env, &Role::Cfo, &admin);
        roles::grant_role(&env, &Role::Cmo, &admin);
        roles::grant_role(&env, &Role::Cfo, &cfo);
        roles::grant_role(&env, &Role::Cmo, &cmo);

        save_config(
            &env,
            &FeeConfig {
                burn_fee_bps: 500,
                withdraw_fee_bps: 500,
                burn_enabled: false,
                base_stake_for_play: 0,
                base_stake_for_earn: 0,
                thawing_period: 0,
                max_user_earning_per_day: 0,
                gold_price: 0,
                silver_price: 0,
                bronze_price: 0,
            },
        );
        save_stats(
            &env,
            &CommissionStats {
                total_commission: 0,
                total_commission_withdrawn: 0,
            },
        );

        events::publish_initialized(&env, admin, token, cfo, cmo);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        roles::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Access control ──────────────────────────────────────────────────────

    /// Grant `role` to `target`. Only the Admin role may grant.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        target: Address,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();
        require_role(&env, &caller, &Role::Admin)?;

        roles::grant_role(&env, &role, &target);
        events::publish_role_changed(&env, role, target, true);
        Ok(())
    }

    /// Revoke `role` from `target`. Only the Admin role may revoke.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        target: Address,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();
        require_role(&env, &caller, &Role::Admin)?;

        roles::revoke_role(&env, &role, &target);
        events::publish_role_changed(&env, role, target, false);
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, who: Address) -> bool {
        roles::has_role(&env, &role, &who)
    }

    // ── Whitelist ───────────────────────────────────────────────────────────

    /// Add a single address to the whitelist. CMO only; idempotent.
    pub fn add_to_whitelist(env: Env, caller: Address, user: Address) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();
        require_role(&env, &caller, &Role::Cmo)?;

        add_whitelisted(&env, &user);
        Ok(())
    }

    /// Bulk-upsert addresses into the whitelist. CMO only.
    pub fn init_whitelist(
        env: Env,
        caller: Address,
        users: Vec<Address>,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();
        require_role(&env, &caller, &Role::Cmo)?;

        for user in users.iter() {
            add_whitelisted(&env, &user);
        }
        Ok(())
    }

    pub fn is_whitelisted(env: Env, user: Address) -> bool {
        whitelisted(&env, &user)
    }

    // ── Fee configuration ───────────────────────────────────────────────────

    /// Set the burn fee in basis points. CFO only.
    pub fn set_burn_fee(env: Env, caller: Address, fee_bps: u32) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("BURN_FEE"), |c| {
            c.burn_fee_bps = fee_bps
        })
    }

    /// Set the withdraw fee in basis points. CFO only.
    pub fn set_withdraw_fee(env: Env, caller: Address, fee_bps: u32) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("WDRW_FEE"), |c| {
            c.withdraw_fee_bps = fee_bps
        })
    }

    /// Toggle burning on commission withdrawal. CFO only.
    pub fn set_burn_enabled(env: Env, caller: Address, enabled: bool) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("BURN_ON"), |c| {
            c.burn_enabled = enabled
        })
    }

    /// Set the minimum play-stake deposit. CFO only.
    pub fn set_base_stake_for_play(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("BASE_PLAY"), |c| {
            c.base_stake_for_play = amount
        })
    }

    /// Set the minimum earn-stake deposit. CFO only.
    pub fn set_base_stake_for_earn(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("BASE_EARN"), |c| {
            c.base_stake_for_earn = amount
        })
    }

    /// Set the thawing period in seconds. CFO only.
    pub fn set_thawing_period(env: Env, caller: Address, seconds: u64) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("THAW_PER"), |c| {
            c.thawing_period = seconds
        })
    }

    /// Set the per-user daily earning cap. CFO only.
    pub fn set_max_user_earning_per_day(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cfo, symbol_short!("MAX_EARN"), |c| {
            c.max_user_earning_per_day = amount
        })
    }

    /// Set the gold boost-item price. Pricing is the CMO's lever.
    pub fn set_gold_price(env: Env, caller: Address, price: i128) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cmo, symbol_short!("GOLD_PRC"), |c| {
            c.gold_price = price
        })
    }

    /// Set the silver boost-item price. CMO only.
    pub fn set_silver_price(env: Env, caller: Address, price: i128) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cmo, symbol_short!("SLVR_PRC"), |c| {
            c.silver_price = price
        })
    }

    /// Set the bronze boost-item price. CMO only.
    pub fn set_bronze_price(env: Env, caller: Address, price: i128) -> Result<(), ContractError> {
        update_config(&env, &caller, &Role::Cmo, symbol_short!("BRNZ_PRC"), |c| {
            c.bronze_price = price
        })
    }

    pub fn get_burn_fee(env: Env) -> Result<u32, ContractError> {
        Ok(load_config(&env)?.burn_fee_bps)
    }

    pub fn get_withdraw_fee(env: Env) -> Result<u32, ContractError> {
        Ok(load_config(&env)?.withdraw_fee_bps)
    }

    /// Return the full fee configuration.
    pub fn get_config(env: Env) -> Result<FeeConfig, ContractError> {
        load_config(&env)
    }

    // ── Stake pools ─────────────────────────────────────────────────────────

    /// Deposit `amount` into the given stake pool.
    ///
    /// The deposit must meet the tier's configured base minimum. The stake
    /// balance is credited before the tokens are pulled; a failed transfer
    /// reverts the whole invocation.
    pub fn stake_tokens(
        env: Env,
        staker: Address,
        tier: StakeTier,
        amount: i128,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        staker.require_auth();

        if !whitelisted(&env, &staker) {
            return Err(ContractError::NotWhitelisted);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let cfg = load_config(&env)?;
        let base = match tier {
            StakeTier::Play => cfg.base_stake_for_play,
            StakeTier::Earn => cfg.base_stake_for_earn,
        };
        if amount < base {
            return Err(ContractError::BelowMinimum);
        }

        let new_balance = read_stake(&env, &tier, &staker).saturating_add(amount);
        write_stake(&env, &tier, &staker, new_balance);

        let token_id = token_address(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_staked(&env, staker, tier, amount, new_balance);
        Ok(())
    }

    /// Withdraw `amount` from the given stake pool, net of the withdraw fee.
    ///
    /// The fee stays in contract custody and is credited to the commission
    /// ledger. The stake is debited before the outbound transfer.
    pub fn withdraw_staked_token(
        env: Env,
        staker: Address,
        tier: StakeTier,
        amount: i128,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let balance = read_stake(&env, &tier, &staker);
        if amount > balance {
            return Err(ContractError::InsufficientStake);
        }

        let cfg = load_config(&env)?;
        let fee = fees::fee_for(amount, cfg.withdraw_fee_bps);

        write_stake(&env, &tier, &staker, balance - amount);

        let mut stats = load_stats(&env);
        stats.total_commission = stats.total_commission.saturating_add(fee);
        save_stats(&env, &stats);

        let token_id = token_address(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &env.current_contract_address(),
            &staker,
            &(amount - fee),
        );

        events::publish_stake_withdrawn(&env, staker, tier, amount, fee);
        Ok(())
    }

    /// Return the user's play-stake balance.
    pub fn get_play_stake(env: Env, user: Address) -> i128 {
        read_stake(&env, &StakeTier::Play, &user)
    }

    /// Return the user's earn-stake balance.
    pub fn get_earn_stake(env: Env, user: Address) -> i128 {
        read_stake(&env, &StakeTier::Earn, &user)
    }

    // ── Reward ledger ───────────────────────────────────────────────────────

    /// Credit reward candidates in bulk. CMO only.
    ///
    /// `users` and `amounts` are parallel arrays; each pair accumulates into
    /// that user's approved amount.
    pub fn batch_add_reward_candidates(
        env: Env,
        caller: Address,
        users: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();
        require_role(&env, &caller, &Role::Cmo)?;

        if users.len() != amounts.len() {
            return Err(ContractError::LengthMismatch);
        }

        let mut total: i128 = 0;
        for i in 0..users.len() {
            let user = users.get(i).ok_or(ContractError::LengthMismatch)?;
            let amount = amounts.get(i).ok_or(ContractError::LengthMismatch)?;
            if amount <= 0 {
                return Err(ContractError::InvalidAmount);
            }

            let mut reward = read_reward(&env, &user);
            reward.approved_amount = reward.approved_amount.saturating_add(amount);
            write_reward(&env, &user, &reward);
            total = total.saturating_add(amount);
        }

        events::publish_reward_candidates_added(&env, users.len(), total);
        Ok(())
    }

    /// Move the caller's full approved reward into the thawing state.
    ///
    /// Fails if nothing is approved or a previous thaw is still pending —
    /// overwriting a pending thaw would discard its balance.
    pub fn unfreeze(env: Env, caller: Address) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();

        if !whitelisted(&env, &caller) {
            return Err(ContractError::NotWhitelisted);
        }

        let reward = read_reward(&env, &caller);
        if reward.approved_amount <= 0 {
            return Err(ContractError::NoRewardCandidate);
        }
        if read_thawing(&env, &caller).status {
            return Err(ContractError::AlreadyThawing);
        }

        let amount = reward.approved_amount;
        write_thawing(
            &env,
            &caller,
            &ThawingState {
                approved_amount: amount,
                status: true,
                started_at: env.ledger().timestamp(),
            },
        );
        write_reward(&env, &caller, &RewardState { approved_amount: 0 });

        events::publish_thawing_started(&env, caller, amount);
        Ok(())
    }

    /// Claim a thawed reward, net of the withdraw fee. Returns the amount
    /// transferred to the caller.
    ///
    /// The thawing record is cleared and the commission credited before the
    /// outbound transfer, so a re-entrant token cannot observe a claimable
    /// balance twice.
    pub fn claim_reward(env: Env, caller: Address) -> Result<i128, ContractError> {
        require_initialized(&env)?;
        caller.require_auth();

        let thawing = read_thawing(&env, &caller);
        if !thawing.status {
            return Err(ContractError::NotThawing);
        }

        let cfg = load_config(&env)?;
        let now = env.ledger().timestamp();
        if now.saturating_sub(thawing.started_at) < cfg.thawing_period {
            return Err(ContractError::ThawingNotElapsed);
        }

        let amount = thawing.approved_amount;
        let fee = fees::fee_for(amount, cfg.withdraw_fee_bps);
        let net = amount - fee;

        write_thawing(
            &env,
            &caller,
            &ThawingState {
                approved_amount: 0,
                status: false,
                started_at: 0,
            },
        );

        let mut stats = load_stats(&env);
        stats.total_commission = stats.total_commission.saturating_add(fee);
        save_stats(&env, &stats);

        let token_id = token_address(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &env.current_contract_address(),
            &caller,
            &net,
        );

        events::publish_reward_claimed(&env, caller, amount, fee);
        Ok(net)
    }

    /// Redirect the full thawing balance into the caller's earn stake.
    /// No fee is taken; the reward stays in contract custody as stake.
    pub fn freeze(env: Env, caller: Address) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();

        let thawing = read_thawing(&env, &caller);
        if !thawing.status {
            return Err(ContractError::NotThawing);
        }

        let amount = thawing.approved_amount;
        let new_balance = read_stake(&env, &StakeTier::Earn, &caller).saturating_add(amount);
        write_stake(&env, &StakeTier::Earn, &caller, new_balance);

        write_thawing(
            &env,
            &caller,
            &ThawingState {
                approved_amount: 0,
                status: false,
                started_at: 0,
            },
        );
        write_reward(&env, &caller, &RewardState { approved_amount: 0 });

        events::publish_reward_frozen(&env, caller, amount);
        Ok(())
    }

    /// Abort the thaw, returning the full balance to the candidate state.
    /// Inverse of `unfreeze`; no fee is taken.
    pub fn cancel(env: Env, caller: Address) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();

        let thawing = read_thawing(&env, &caller);
        if !thawing.status {
            return Err(ContractError::NotThawing);
        }

        let mut reward = read_reward(&env, &caller);
        reward.approved_amount = reward.approved_amount.saturating_add(thawing.approved_amount);
        write_reward(&env, &caller, &reward);

        write_thawing(
            &env,
            &caller,
            &ThawingState {
                approved_amount: 0,
                status: false,
                started_at: 0,
            },
        );

        events::publish_thawing_cancelled(&env, caller, thawing.approved_amount);
        Ok(())
    }

    /// Return the user's candidate reward record.
    pub fn get_reward_state(env: Env, user: Address) -> RewardState {
        read_reward(&env, &user)
    }

    /// Return the user's thawing record.
    pub fn get_thawing_state(env: Env, user: Address) -> ThawingState {
        read_thawing(&env, &user)
    }

    // ── Boost items ─────────────────────────────────────────────────────────

    /// Purchase a boost item at the configured price.
    ///
    /// A user may hold at most one item across all levels; the full price is
    /// credited to the commission ledger.
    pub fn stake_for_boost(
        env: Env,
        buyer: Address,
        level: BoostLevel,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        buyer.require_auth();

        if !whitelisted(&env, &buyer) {
            return Err(ContractError::NotWhitelisted);
        }
        if env.storage().persistent().has(&(BOOST, buyer.clone())) {
            return Err(ContractError::AlreadyHoldingBoost);
        }

        let cfg = load_config(&env)?;
        let price = match level {
            BoostLevel::Gold => cfg.gold_price,
            BoostLevel::Silver => cfg.silver_price,
            BoostLevel::Bronze => cfg.bronze_price,
        };

        let key = (BOOST, buyer.clone());
        env.storage().persistent().set(&key, &level);
        bump(&env, &key);

        let mut stats = load_stats(&env);
        stats.total_commission = stats.total_commission.saturating_add(price);
        save_stats(&env, &stats);

        let token_id = token_address(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &buyer,
            &env.current_contract_address(),
            &price,
        );

        events::publish_boost_purchased(&env, buyer, level, price);
        Ok(())
    }

    /// Returns 1 if the user holds exactly `level`, 0 otherwise.
    pub fn user_boost_item_balance(env: Env, user: Address, level: BoostLevel) -> u32 {
        match env.storage().persistent().get::<_, BoostLevel>(&(BOOST, user)) {
            Some(held) if held == level => 1,
            _ => 0,
        }
    }

    /// Return the boost level held by the user, if any.
    pub fn get_boost_item(env: Env, user: Address) -> Option<BoostLevel> {
        env.storage().persistent().get(&(BOOST, user))
    }

    // ── Commission ledger ───────────────────────────────────────────────────

    /// Return the aggregate commission counters.
    pub fn get_statistic(env: Env) -> CommissionStats {
        load_stats(&env)
    }

    /// Drain `amount` from the accumulated commission to `to`.
    ///
    /// Admin or CFO only. When burning is enabled, the burn fee's share is
    /// destroyed and only the remainder reaches `to`; the withdrawn counter
    /// always advances by the full `amount`.
    pub fn withdraw_fee(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        caller.require_auth();
        require_admin_or_cfo(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut stats = load_stats(&env);
        let available = stats.total_commission - stats.total_commission_withdrawn;
        if amount > available {
            return Err(ContractError::InsufficientCommission);
        }

        stats.total_commission_withdrawn =
            stats.total_commission_withdrawn.saturating_add(amount);
        save_stats(&env, &stats);

        let cfg = load_config(&env)?;
        let burned = if cfg.burn_enabled {
            fees::fee_for(amount, cfg.burn_fee_bps)
        } else {
            0
        };

        let token_id = token_address(&env)?;
        let client = token::Client::new(&env, &token_id);
        if burned > 0 {
            client.burn(&env.current_contract_address(), &burned);
        }
        client.transfer(&env.current_contract_address(), &to, &(amount - burned));

        events::publish_fee_withdrawn(&env, to, amount, burned);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
