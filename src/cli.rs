use std::io::{self, Write};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rand::thread_rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use crate::config::{Settings, SettingsArgs};
use crate::dom::{Alert, Element, MemoryDocument, ids};
use crate::view::{ClickOutcome, ShortenOutcome, ShortenerView};

/// Fabricate NIET.ly short links from the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Clipboard used by the copy action
    #[arg(
        long = "clipboard",
        value_enum,
        env = "NIET_CLIPBOARD",
        default_value_t = ClipboardBackend::System,
        global = true
    )]
    clipboard: ClipboardBackend,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shorten a single URL and print the fabricated link
    Shorten {
        /// URL to shorten
        url: String,

        /// Copy the short link to the clipboard
        #[arg(long = "copy", action = ArgAction::SetTrue)]
        copy: bool,
    },
    /// Interactive page (default): enter URLs, `:copy` copies, `:quit` exits
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClipboardBackend {
    /// Operating system clipboard
    System,
    /// In-process clipboard, nothing leaves the program
    Memory,
}

impl ClipboardBackend {
    fn open(self) -> Box<dyn Clipboard> {
        match self {
            ClipboardBackend::System => Box::new(SystemClipboard),
            ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
        }
    }
}

/// Blocking notice on a terminal: printed to stderr.
#[derive(Debug, Clone, Copy, Default)]
struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Copy,
    Url(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        ":q" | ":quit" => Input::Quit,
        ":c" | ":copy" => Input::Copy,
        _ => Input::Url(line),
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings.into_settings()?;
    let clipboard = cli.clipboard.open();
    let command = cli.command.unwrap_or(Commands::Interactive);

    tracing::debug!(?settings, backend = ?cli.clipboard, "starting page");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let mut stdout = io::stdout();
        match command {
            Commands::Shorten { url, copy } => {
                shorten_once(settings, clipboard.as_ref(), &url, copy, &mut stdout).await
            }
            Commands::Interactive => {
                let input = BufReader::new(tokio::io::stdin());
                interactive(settings, clipboard.as_ref(), input, &mut stdout).await
            }
        }
    })
}

async fn shorten_once<W: Write>(
    settings: Settings,
    clipboard: &dyn Clipboard,
    url: &str,
    copy: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let doc = MemoryDocument::page();
    let view = ShortenerView::bind(&doc, TerminalAlert, settings)?;
    let mut rng = thread_rng();

    view.url_input().set_value(url);
    match view.click(ids::SHORTEN_BUTTON, &mut rng, clipboard).await? {
        ClickOutcome::Shorten(ShortenOutcome::Shortened { .. }) => {}
        _ => anyhow::bail!("no URL given"),
    }

    if copy {
        // Failures are logged by the view.
        view.click(ids::COPY_BUTTON, &mut rng, clipboard).await?;
    }

    render(&view, out)?;
    Ok(())
}

/// Line-driven page: each line is typed into the input and shorten clicked.
/// Returns on `:quit` or end of input.
async fn interactive<R, W>(
    settings: Settings,
    clipboard: &dyn Clipboard,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let doc = MemoryDocument::page();
    let view = ShortenerView::bind(&doc, TerminalAlert, settings)?;
    let mut rng = thread_rng();
    let mut lines = input.lines();

    writeln!(out, "Paste a URL and press Enter. `:copy` copies the link, `:quit` exits.")?;

    view.run_until(async {
        loop {
            write!(out, "url> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let target = match parse_input(&line) {
                Input::Quit => break,
                Input::Copy => {
                    if !view.result_visible() {
                        writeln!(out, "! Nothing to copy yet")?;
                        continue;
                    }
                    ids::COPY_BUTTON
                }
                Input::Url(text) => {
                    view.url_input().set_value(text);
                    ids::SHORTEN_BUTTON
                }
            };

            view.click(target, &mut rng, clipboard).await?;
            render(&view, out)?;
        }
        Ok::<_, anyhow::Error>(())
    })
    .await
}

/// Print the visible parts of the page.
fn render<E, A, W>(view: &ShortenerView<E, A>, out: &mut W) -> io::Result<()>
where
    E: Element + 'static,
    A: Alert,
    W: Write,
{
    if view.result_visible() {
        let link = view.short_url();
        writeln!(
            out,
            "  {}  ->  {}",
            link.text(),
            link.attribute("href").unwrap_or_default()
        )?;
    }
    if view.confirmation_visible() {
        writeln!(out, "  {}", view.copy_message().text())?;
    }
    Ok(())
}
