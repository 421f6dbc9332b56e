use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use portfolio_assist::app::App;
use portfolio_assist::pipeline::{ContactSubmission, FormUi};

/// Terminal rendering of the contact form's busy/success/failure states.
struct TerminalFormUi;

#[async_trait]
impl FormUi for TerminalFormUi {
    async fn busy(&self) {
        eprintln!("⏳ Sending...");
    }

    async fn idle(&self) {
        eprintln!("   Send Message");
    }

    async fn show_success(&self, display: std::time::Duration) {
        eprintln!(
            "✅ Message sent! Thanks for reaching out. ({}s)",
            display.as_secs()
        );
    }

    async fn show_failure(&self, detail: &str) {
        eprintln!("❌ Submission failed: {detail}");
    }
}

/// Parse `/contact name | email | message` into a submission.
/// Missing segments coerce to empty strings.
fn parse_contact(args: &str) -> ContactSubmission {
    let mut parts = args.splitn(3, '|').map(|s| s.trim().to_string());
    ContactSubmission {
        name: parts.next().unwrap_or_default(),
        email: parts.next().unwrap_or_default(),
        message: parts.next().unwrap_or_default(),
    }
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; absent collaborators just disable features
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let app = App::bootstrap();

    eprintln!("💬 Portfolio Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Record store: {}",
        if app.store_configured() { "enabled" } else { "disabled" }
    );
    eprintln!(
        "   Email dispatch: {}",
        if app.mailer_configured() { "enabled" } else { "disabled" }
    );
    eprintln!("   Chat with the assistant, or:");
    eprintln!("   /contact name | email | message   submit the contact form");
    eprintln!("   /quit                             exit\n");

    let ui: Arc<dyn FormUi> = Arc::new(TerminalFormUi);
    let pipeline = app.pipeline(ui);

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        if line == "/quit" {
            break;
        }

        if let Some(args) = line.strip_prefix("/contact") {
            let submission = parse_contact(args);
            pipeline.submit(submission).await;
            eprint!("> ");
            continue;
        }

        if let Some(reply) = app.chat().respond(line).await {
            println!("\n{reply}\n");
        }
        eprint!("> ");
    }

    Ok(())
}
