//! Record Demo - Entry Point
//!
//! Runs the scripted size-record flow against a generated party: init the
//! record, walk a series of random challengers past it, read the record info
//! back, and hand out a gift ribbon.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use specimen_record::context::GameContext;
use specimen_record::core::types::{StatVariation, UnitSystem};
use specimen_record::save::{Creature, SaveData, StringSlot};
use specimen_record::script;
use specimen_record::species::Species;

fn random_thornling(rng: &mut ChaCha8Rng) -> Creature {
    let stats = StatVariation::new(
        rng.gen_range(0..16),
        rng.gen_range(0..16),
        rng.gen_range(0..16),
        rng.gen_range(0..16),
        rng.gen_range(0..16),
        rng.gen_range(0..16),
    );
    Creature::new(Species::Thornling, rng.gen(), stats)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("specimen_record=debug")
        .init();

    tracing::info!("Record demo starting...");

    let mut save = SaveData::new("Rowan");
    save.unit_system = UnitSystem::Metric;
    let mut ctx = GameContext::new(save);

    script::init_thornling_record(&mut ctx);
    script::get_thornling_record_info(&mut ctx);
    println!(
        "Starting record: {} by {}: {} cm",
        ctx.strings.get(StringSlot::Var1),
        ctx.strings.get(StringSlot::Var2),
        ctx.strings.get(StringSlot::Var3),
    );

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for round in 0..10 {
        ctx.party.set(0, random_thornling(&mut rng));
        ctx.specials.result = 0;
        script::compare_thornling_size(&mut ctx);
        println!(
            "Round {}: outcome {} ({} cm)",
            round,
            ctx.specials.result,
            ctx.strings.get(StringSlot::Var2),
        );
    }

    script::get_thornling_record_info(&mut ctx);
    println!(
        "Final record: {} by {}: {} cm",
        ctx.strings.get(StringSlot::Var1),
        ctx.strings.get(StringSlot::Var2),
        ctx.strings.get(StringSlot::Var3),
    );

    script::give_gift_ribbon(&mut ctx, 0, 1);
    println!(
        "Party creature has marine ribbon: {}",
        ctx.party
            .get(0)
            .map(|c| c.has_ribbon(specimen_record::save::RibbonAttr::Marine))
            .unwrap_or(false),
    );
}
