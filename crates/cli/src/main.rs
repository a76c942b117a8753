use std::io::{self, Write};

use anyhow::Result;
use assist_agents::FlightAssistAgent;
use assist_api::config::{DEFAULT_BIND, DEFAULT_ENVIRONMENT};
use assist_api::{parse_origin_list, serve, ApiConfig};
use assist_core::{Category, Query, RecommendationEnvelope};
use assist_observability::{init_tracing, AppMetrics};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "flight-assist")]
#[command(about = "Passenger guidance for flight disruptions", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one query and print the JSON reply
    Ask {
        text: String,
        /// Include the matched category next to the response
        #[arg(long)]
        with_category: bool,
    },
    /// Interactive prompt; type 'exit' to quit
    Chat,
    /// List categories and their trigger keywords in precedence order
    Categories,
    /// Run the HTTP gateway
    Serve {
        #[arg(long, env = "ASSIST_BIND", default_value = DEFAULT_BIND)]
        bind: String,
        #[arg(long, env = "ASSIST_ENVIRONMENT", default_value = DEFAULT_ENVIRONMENT)]
        environment: String,
        #[arg(long, env = "ASSIST_ALLOWED_ORIGINS", default_value = "")]
        allowed_origins: String,
    },
}

#[derive(Debug, Serialize)]
struct CategoryListing {
    category: &'static str,
    triggers: &'static [&'static str],
    fallback: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("assist_cli");
    let cli = Cli::parse();

    let agent = FlightAssistAgent::new(AppMetrics::shared());

    match cli.command {
        Command::Ask {
            text,
            with_category,
        } => {
            let classified = agent.handle_query(&Query { input_text: text });
            let output = if with_category {
                serde_json::to_string_pretty(&classified)?
            } else {
                serde_json::to_string_pretty(&RecommendationEnvelope::from(classified.response))?
            };
            println!("{output}");
        }
        Command::Chat => run_chat(&agent)?,
        Command::Categories => {
            let listing = Category::ALL
                .into_iter()
                .map(|category| CategoryListing {
                    category: category.as_code(),
                    triggers: category.triggers(),
                    fallback: category == Category::General,
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Command::Serve {
            bind,
            environment,
            allowed_origins,
        } => {
            let config = ApiConfig {
                bind,
                environment,
                allowed_origins: parse_origin_list(&allowed_origins),
                ..ApiConfig::from_env()
            };
            serve(config).await?;
        }
    }

    Ok(())
}

fn run_chat(agent: &FlightAssistAgent) -> Result<()> {
    println!("Flight Assist chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim_end_matches(['\r', '\n']);
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let classified = agent.handle_query(&Query {
            input_text: message.to_string(),
        });
        let response = classified.response;

        println!("\n[{}] {}", classified.category.as_code(), response.message);
        for (index, item) in response.recommendations.iter().enumerate() {
            println!("  {}. {item}", index + 1);
        }
        println!("{}\n", response.passenger_message);
    }

    Ok(())
}
