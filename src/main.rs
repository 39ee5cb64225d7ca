use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Read, Write};
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use linequill::config::Config;
use linequill::editor::VimEditor;
use linequill::input::InputHandler;
use linequill::ui::UI;

/// Linequill - a terminal text editor with vim-style modal keybindings
#[derive(Parser)]
#[command(name = "linequill")]
#[command(version)]
#[command(about = "A terminal text editor with vim-style modal keybindings", long_about = None)]
struct Cli {
    /// Text file to edit (omit to read from stdin if piped, or open a sample
    /// document if interactive)
    file: Option<String>,
}

/// Set up a panic hook that restores the terminal before displaying panic
/// information.
///
/// Without this, panic messages would be hidden or garbled by raw mode and
/// the alternate screen, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state; use stderr to avoid interfering
        // with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

const SAMPLE_TEXT: &str = "\
Welcome to linequill.

Normal mode: h j k l move, 0 ^ $ gg G jump,
a A i I insert, o O open lines, x X D delete, C change.
Escape leaves insert mode; Ctrl-q quits.
";

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Read the document BEFORE terminal setup (stdin might carry the text,
    // so it has to be drained before we take over the terminal)
    let (text, stdin_was_piped) = if let Some(file_path) = cli.file {
        let text = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path))?;
        (text, false)
    } else if !io::stdin().is_terminal() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        (text, true)
    } else {
        (SAMPLE_TEXT.to_string(), false)
    };

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let config = Config::load();
    let ui = UI::new(&config);

    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut editor = VimEditor::new();
    editor.load_text(&text);

    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut editor);

    // Termion restores the terminal through Drop guards, but make sure the
    // cursor is visible before exiting
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    editor: &mut VimEditor,
) -> Result<()> {
    loop {
        ui.render(terminal, editor)?;

        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_event(event, editor)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
