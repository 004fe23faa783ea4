use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use santo_reader::display::{capitalize_words_except_de, format_date_label};
use santo_reader::liturgy::{liturgical_color_hex, reading_pages, LiturgyData, ReadingPage};
use santo_reader::{scraper, tokenize, RenderToken, SaintContentBlock, SaintOfDayRecord, Settings};

#[derive(Parser)]
#[command(name = "santo_reader", about = "Saint of the day and daily readings from Canção Nova")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and extract today's saint
    Santo {
        /// Page to fetch instead of the configured one
        #[arg(long)]
        url: Option<String>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the readings of a day
    Liturgia {
        /// Day to fetch, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Mark verse numbers in a reading body
    Versos {
        /// Citation the body belongs to, e.g. "Mt 5, 14-17a"
        #[arg(short, long, default_value = "")]
        reference: String,
        text: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Santo { url, json } => {
            let settings = Settings::load().context("loading settings")?;
            let url = url.unwrap_or_else(|| settings.saint_url.clone());
            let client = scraper::build_client(&settings)?;
            let pb = spinner("Fetching saint of the day...")?;
            let record = scraper::fetch_saint_page(&client, &url, &settings.site)
                .await
                .with_context(|| format!("fetching {}", url));
            pb.finish_and_clear();
            let record = record?;

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_saint(&record);
            }
            Ok(())
        }
        Commands::Liturgia { date, json } => {
            let settings = Settings::load().context("loading settings")?;
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let client = scraper::build_client(&settings)?;
            let pb = spinner("Fetching readings...")?;
            let data = scraper::fetch_liturgy(&client, &settings, date)
                .await
                .with_context(|| format!("fetching liturgy for {}", date));
            pb.finish_and_clear();
            let data = data?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_liturgy(&data);
            }
            Ok(())
        }
        Commands::Versos { reference, text, json } => {
            let tokens = tokenize(&text, &reference);
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                println!("{}", render_tokens(&tokens));
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn spinner(msg: &'static str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn print_saint(r: &SaintOfDayRecord) {
    if let Some(label) = format_date_label(r) {
        println!("{}", label);
    }
    match &r.title {
        Some(title) => println!("{}\n", capitalize_words_except_de(title)),
        None => println!("(sem título)\n"),
    }
    if let Some(image) = &r.image {
        println!("Imagem: {}\n", image);
    }

    if r.has_blocks() {
        for block in &r.blocks {
            print_block(block);
        }
    } else if let Some(text) = &r.full_text {
        println!("{}\n", text);
    } else {
        println!("Nenhum conteúdo encontrado.\n");
    }

    if let Some(others) = &r.other_saints {
        println!("--- Outros santos e beatos ---");
        for name in others {
            println!("  • {}", name);
        }
    }
}

fn print_block(block: &SaintContentBlock) {
    match block {
        SaintContentBlock::Heading { level, text } => {
            println!("{} {}\n", "#".repeat(*level as usize), text);
        }
        SaintContentBlock::Paragraph { text } => println!("{}\n", text),
        SaintContentBlock::Quote { text } => println!("> {}\n", text),
        SaintContentBlock::List { ordered, items } => {
            for (i, item) in items.iter().enumerate() {
                if *ordered {
                    println!("{}. {}", i + 1, item);
                } else {
                    println!("- {}", item);
                }
            }
            println!();
        }
    }
}

fn print_liturgy(data: &LiturgyData) {
    println!("{} | {}", data.date, data.celebration);
    if !data.color.is_empty() {
        println!("Cor: {} ({})", data.color, liturgical_color_hex(&data.color));
    }

    for page in reading_pages(data) {
        println!("\n=== {} | {} ===", page.label(), page.reference());
        match page {
            ReadingPage::Psalm(psalm) => {
                if !psalm.response.is_empty() {
                    println!("R. {}\n", psalm.response);
                }
                for line in psalm.verses() {
                    println!("  {}", line);
                }
            }
            ReadingPage::Reading { reading, .. } => {
                if !reading.title.is_empty() {
                    println!("{}\n", reading.title);
                }
                println!("{}", render_tokens(&page.tokens()));
            }
        }
    }
}

fn render_tokens(tokens: &[RenderToken]) -> String {
    tokens
        .iter()
        .map(|t| {
            if t.is_verse_number {
                format!("[{}]", t.text)
            } else {
                t.text.clone()
            }
        })
        .collect()
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
