use clap::Parser;
use flowline::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate random edit scripts for the flowline editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON script to
    #[arg(short, long, default_value = "generated_script.json")]
    output: String,

    /// The number of events to generate
    #[arg(long, default_value_t = 50)]
    steps: usize,

    /// Seed for a reproducible script
    #[arg(long)]
    seed: Option<u64>,
}

const FIELD_NAMES: [&str; 5] = ["url", "method", "recipient", "delay", "template"];
const LABELS: [&str; 6] = [
    "Send email",
    "Wait",
    "Notify team",
    "Update record",
    "  ",
    "Fetch profile",
];

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating a script with {} events...", cli.steps);

    let mut editor = Editor::default();
    let mut events = Vec::with_capacity(cli.steps);
    // Ids of removed actions, replayed later as late callbacks.
    let mut removed: Vec<String> = Vec::new();

    for step in 0..cli.steps {
        let event = next_event(&mut rng, &editor, &removed);
        if let EditorEvent::DeleteAction { id } = &event {
            removed.push(id.clone());
        }
        editor.dispatch(event.clone());
        editor.tick();
        if let Err(violation) = editor.sequence().validate() {
            return Err(format!("Invariant broken at step {}: {}", step, violation).into());
        }
        events.push(event);
    }

    let script = EditScript::new(events);
    fs::write(&cli.output, script.to_json_pretty()?)?;

    println!(
        "-> Final chain holds {} action(s) across {} nodes.",
        editor.sequence().action_count(),
        editor.sequence().len()
    );
    println!(
        "Successfully generated and saved edit script to '{}'",
        cli.output
    );

    Ok(())
}

/// Picks the next gesture a plausible user could make on the current chain.
fn next_event(rng: &mut StdRng, editor: &Editor, removed: &[String]) -> EditorEvent {
    let sequence = editor.sequence();
    let points: Vec<&str> = sequence.insert_points().map(|n| n.id.as_str()).collect();
    let actions: Vec<&str> = sequence.actions().map(|n| n.id.as_str()).collect();

    if editor.session().is_open() {
        return match rng.random_range(0..10) {
            0..=5 => EditorEvent::EditorSave {
                label: LABELS.choose(rng).map(|l| l.to_string()),
                fields: Some(random_fields(rng)),
            },
            6..=7 => EditorEvent::EditorCancel,
            _ => EditorEvent::EditorDelete,
        };
    }

    let roll = rng.random_range(0..100);
    match (roll, actions.choose(rng)) {
        (0..=39, _) | (_, None) => EditorEvent::InsertPointActivated {
            point_id: points.choose(rng).map(|p| p.to_string()).unwrap_or_default(),
        },
        (40..=59, Some(id)) => EditorEvent::DeleteAction { id: id.to_string() },
        (60..=74, Some(id)) => EditorEvent::RenameAction {
            id: id.to_string(),
            label: LABELS.choose(rng).map(|l| l.to_string()).unwrap_or_default(),
        },
        (75..=89, Some(id)) => EditorEvent::OpenEditor { id: id.to_string() },
        (90..=94, Some(id)) => EditorEvent::Connect {
            source: id.to_string(),
            target: "end".to_string(),
        },
        (_, Some(id)) => EditorEvent::DeleteAction {
            id: removed
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
        },
    }
}

fn random_fields(rng: &mut StdRng) -> Vec<Field> {
    let count = rng.random_range(0..=3);
    (0..count)
        .map(|i| {
            let name = FIELD_NAMES.choose(rng).copied().unwrap_or("field");
            Field::new(name, format!("value-{}", i))
        })
        .collect()
}
