use clap::{Parser, ValueEnum};
use flowline::prelude::*;
use std::io::{self, Write};

/// How the final frame is printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Replays workflow edit scripts or edits a workflow interactively
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the edit script JSON file
    script_path: Option<String>,

    /// Output format for the resulting frame
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Vertical distance between nodes
    #[arg(long)]
    spacing: Option<f64>,

    /// Horizontal center of the chain
    #[arg(long)]
    center_x: Option<f64>,

    /// Vertical position of the Start node
    #[arg(long)]
    origin_y: Option<f64>,

    /// Run in interactive mode to be prompted for commands
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

impl Cli {
    fn layout(&self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            center_x: self.center_x.unwrap_or(base.center_x),
            origin_y: self.origin_y.unwrap_or(base.origin_y),
            spacing: self.spacing.unwrap_or(base.spacing),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.human {
        run_interactive(&cli);
    } else {
        run_script(&cli);
    }
}

/// Replays a script file and prints the settled frame.
fn run_script(cli: &Cli) {
    let script_path = cli.script_path.as_deref().unwrap_or_else(|| {
        exit_with_error("Script path is required in non-interactive mode.");
    });

    let script = EditScript::from_file(script_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load edit script: {}", e)));

    let mut editor = Editor::new(cli.layout(script.layout.unwrap_or_default()));
    let report = script.replay(&mut editor);

    print_frame(&editor, cli.format);

    println!("\n--- Replay Summary ---");
    println!("Events:   {}", script.events.len());
    println!("Applied:  {}", report.applied);
    println!("Ignored:  {}", report.ignored);
    println!("Actions:  {}", editor.sequence().action_count());

    if !report.is_clean() {
        for (index, violation) in &report.violations {
            eprintln!("  -> Event {}: {}", index, violation);
        }
        exit_with_error("The workflow chain became invalid during replay.");
    }
}

/// Runs a prompt loop where every command is applied and the frame reprinted.
fn run_interactive(cli: &Cli) {
    println!("--- Flowline Interactive Mode ---");
    println!("Type 'help' for the list of commands.");

    let mut editor = Editor::new(cli.layout(LayoutConfig::default()));
    print_frame(&editor, cli.format);

    loop {
        let Some(line) = prompt_for_input("flowline") else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        let changed = match (command, args.as_slice()) {
            ("quit" | "exit", _) => break,
            ("help", _) => {
                print_help();
                continue;
            }
            ("show", _) => {
                print_frame(&editor, cli.format);
                continue;
            }
            ("reset", _) => {
                editor.reset();
                true
            }
            ("insert", [point_id]) => editor.dispatch(EditorEvent::InsertPointActivated {
                point_id: point_id.to_string(),
            }),
            ("delete", [id]) => editor.dispatch(EditorEvent::DeleteAction { id: id.to_string() }),
            ("rename", [id, label @ ..]) => editor.dispatch(EditorEvent::RenameAction {
                id: id.to_string(),
                label: label.join(" "),
            }),
            ("open", [id]) => editor.dispatch(EditorEvent::OpenEditor { id: id.to_string() }),
            ("label", label) => editor.session_mut().set_label(label.join(" ")),
            ("field", ["add"]) => editor.session_mut().add_field(),
            ("field", ["rm", index]) => match index.parse() {
                Ok(index) => editor.session_mut().remove_field(index),
                Err(_) => false,
            },
            ("field", ["set", index, name, value @ ..]) => match index.parse::<usize>() {
                Ok(index) => {
                    let session = editor.session_mut();
                    session.set_field_name(index, *name) && session.set_field_value(index, value.join(" "))
                }
                Err(_) => false,
            },
            ("save", _) => editor.dispatch(EditorEvent::EditorSave {
                label: None,
                fields: None,
            }),
            ("remove", _) => editor.dispatch(EditorEvent::EditorDelete),
            ("cancel", _) => editor.dispatch(EditorEvent::EditorCancel),
            ("connect", [source, target]) => editor.dispatch(EditorEvent::Connect {
                source: source.to_string(),
                target: target.to_string(),
            }),
            _ => {
                println!("Unknown or malformed command. Type 'help' for usage.");
                continue;
            }
        };

        if !changed {
            println!("(no effect)");
        }
        editor.tick();
        print_frame(&editor, cli.format);
    }
}

fn print_frame(editor: &Editor, format: OutputFormat) {
    let frame = editor.frame();
    match format {
        OutputFormat::Text => print!("\n{}", frame),
        OutputFormat::Json => match frame.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize frame: {}", e)),
        },
    }
}

fn print_help() {
    println!("  insert <insert-point-id>        add an action at an insert point");
    println!("  delete <action-id>              delete an action");
    println!("  rename <action-id> <label>      rename an action (empty resets)");
    println!("  open <action-id>                open an action in the editor drawer");
    println!("  label <text>                    set the drawer's label");
    println!("  field add | rm <i> | set <i> <name> <value>");
    println!("  save | cancel | remove          close the drawer");
    println!("  connect <source> <target>       draw a manual connection");
    println!("  show | reset | help | quit");
}

/// Prompts for one line. Returns `None` on end of input.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();
    print!("{}> ", prompt_text);
    if io::stdout().flush().is_err() {
        return None;
    }
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
