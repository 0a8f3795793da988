//! Run a battle between two Pokémon.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::Instrument;

use pokebattle_domain::combat::{apply_round, build_winner};
use pokebattle_domain::prefetch::plan_prefetch;
use pokebattle_domain::{
    summarize, BattleHistory, BattleReport, Combatant, MoveDetail, MoveId, PokemonPayload,
    PreBattleData,
};

use super::RunBattleError;
use crate::infrastructure::ports::{GatewayError, RandomPort, ResourceGateway, ResourceKind};

/// Rounds a battle may last before it is abandoned.
pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

#[derive(Debug, Clone)]
pub struct BattleConfig {
    /// Two combatants whose moves all lack power would otherwise never finish.
    pub max_rounds: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

type FetchHandle = JoinHandle<Result<Arc<Value>, GatewayError>>;

/// Use case for simulating a battle.
///
/// Rounds run strictly one after another. Within a round both chosen moves
/// (and at most one prefetched move) are fetched concurrently, and the round
/// waits for every fetch to settle before any hit points change. Any failed
/// fetch, the prefetch included, aborts the battle. Fetches run
/// as detached tasks, so a fetch still populates the cache when the battle
/// that started it is dropped.
pub struct RunBattle {
    gateway: Arc<dyn ResourceGateway>,
    random: Arc<dyn RandomPort>,
    config: BattleConfig,
}

impl RunBattle {
    pub fn new(
        gateway: Arc<dyn ResourceGateway>,
        random: Arc<dyn RandomPort>,
        config: BattleConfig,
    ) -> Self {
        Self {
            gateway,
            random,
            config,
        }
    }

    /// Simulate a battle between the Pokémon named (or numbered) `identifier1` and `identifier2`.
    ///
    /// Any failure aborts the whole battle; no partial history is returned.
    pub async fn execute(
        &self,
        identifier1: &str,
        identifier2: &str,
    ) -> Result<BattleReport, RunBattleError> {
        let span = tracing::info_span!(
            "battle",
            battle_id = %self.random.gen_uuid(),
            pokemon1 = identifier1,
            pokemon2 = identifier2
        );

        async {
            let result = self.run(identifier1, identifier2).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Battle aborted");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        identifier1: &str,
        identifier2: &str,
    ) -> Result<BattleReport, RunBattleError> {
        let (mut pokemon1, mut pokemon2) = self.resolve_combatants(identifier1, identifier2).await?;
        let pre_battle_data = PreBattleData::new(&pokemon1, &pokemon2);

        tracing::info!(
            pokemon1_id = %pokemon1.id(),
            pokemon1_hp = pokemon1.hp(),
            pokemon2_id = %pokemon2.id(),
            pokemon2_hp = pokemon2.hp(),
            "Battle started"
        );

        let mut history = BattleHistory::new();
        while pokemon1.is_standing() && pokemon2.is_standing() {
            if history.len() >= self.config.max_rounds {
                return Err(RunBattleError::RoundLimitExceeded(self.config.max_rounds));
            }
            self.play_round(&mut pokemon1, &mut pokemon2, &mut history)
                .await?;
        }

        let winner = build_winner(&pokemon1, &pokemon2, history.len());
        tracing::info!(
            winner_id = %winner.id,
            winner = %winner.name,
            total_rounds = winner.total_rounds,
            "Battle finished"
        );

        Ok(BattleReport {
            pre_battle_data,
            rounds: history.into_rounds(),
            winner,
        })
    }

    /// Fetch and summarize both combatants.
    ///
    /// The same identifier twice is fetched once; the second combatant is an
    /// independent copy with its own hit points.
    async fn resolve_combatants(
        &self,
        identifier1: &str,
        identifier2: &str,
    ) -> Result<(Combatant, Combatant), RunBattleError> {
        if identifier1 == identifier2 {
            let raw = settle(self.spawn_fetch(ResourceKind::Pokemon, identifier1.to_string())).await?;
            let pokemon = decode_pokemon(&raw)?;
            return Ok((pokemon.clone(), pokemon));
        }

        let (raw1, raw2) = tokio::join!(
            settle(self.spawn_fetch(ResourceKind::Pokemon, identifier1.to_string())),
            settle(self.spawn_fetch(ResourceKind::Pokemon, identifier2.to_string()))
        );
        Ok((decode_pokemon(&*raw1?)?, decode_pokemon(&*raw2?)?))
    }

    async fn play_round(
        &self,
        pokemon1: &mut Combatant,
        pokemon2: &mut Combatant,
        history: &mut BattleHistory,
    ) -> Result<(), RunBattleError> {
        let attack1 = pokemon1
            .choose_move(|len| self.random.gen_range(0, len - 1))?
            .clone();
        let attack2 = pokemon2
            .choose_move(|len| self.random.gen_range(0, len - 1))?
            .clone();

        // Snapshot before this round's fetches can add keys.
        let cached = self.cached_move_ids();
        let prefetch = plan_prefetch(attack1.id, attack2.id, &cached, pokemon1, pokemon2);

        let fetch1 = self.spawn_fetch(ResourceKind::Move, attack1.id.to_string());
        let fetch2 = self.spawn_fetch(ResourceKind::Move, attack2.id.to_string());
        let fetch_extra = prefetch.map(|move_id| {
            tracing::debug!(move_id = %move_id, "Prefetching move");
            self.spawn_fetch(ResourceKind::Move, move_id.to_string())
        });

        let (detail1, detail2, extra) = tokio::join!(settle(fetch1), settle(fetch2), async move {
            match fetch_extra {
                Some(handle) => Some(settle(handle).await),
                None => None,
            }
        });

        // The prefetched document is only wanted in the cache, but its failure
        // fails the round like any other fetch.
        extra.transpose()?;

        let power1 = decode_move(&*detail1?)?.effective_power();
        let power2 = decode_move(&*detail2?)?.effective_power();

        let (hp1, hp2) = apply_round(pokemon1.hp(), power1, pokemon2.hp(), power2);
        pokemon1.set_hp(hp1);
        pokemon2.set_hp(hp2);

        let round = history.record(pokemon1, &attack1, power1, pokemon2, &attack2, power2);
        tracing::debug!(
            round = round.round,
            attack1 = %attack1.name,
            hp1,
            attack2 = %attack2.name,
            hp2,
            "Round complete"
        );

        Ok(())
    }

    /// Ids of the moves cached right now; keys that are not numeric are skipped.
    fn cached_move_ids(&self) -> HashSet<MoveId> {
        self.gateway
            .cached_identifiers(ResourceKind::Move)
            .iter()
            .filter_map(|identifier| identifier.parse().ok())
            .collect()
    }

    fn spawn_fetch(&self, kind: ResourceKind, identifier: String) -> FetchHandle {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move { gateway.fetch(kind, &identifier).await }.in_current_span())
    }
}

async fn settle(handle: FetchHandle) -> Result<Arc<Value>, RunBattleError> {
    handle
        .await
        .map_err(|e| RunBattleError::FetchTask(e.to_string()))?
        .map_err(RunBattleError::from)
}

fn decode_pokemon(raw: &Value) -> Result<Combatant, RunBattleError> {
    let payload =
        PokemonPayload::deserialize(raw).map_err(|e| RunBattleError::payload("pokemon", e))?;
    Ok(summarize(&payload)?)
}

fn decode_move(raw: &Value) -> Result<MoveDetail, RunBattleError> {
    MoveDetail::deserialize(raw).map_err(|e| RunBattleError::payload("move", e))
}
