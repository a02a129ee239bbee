use crate::facts::{resolve_fun_fact, FactSource, NumbersApiClient, OfflineFacts};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use numclass_core::classify::classify;
use numclass_core::response::{
    build_classification_response, invalid_number_response, parse_number,
    ClassificationResponse, InvalidNumberResponse, NumberResponse,
};

#[derive(Debug, clap::Args, Clone)]
pub struct ClassifyOptions {
    /// Integer to classify (e.g. "371" or "-28")
    #[arg(allow_negative_numbers = true)]
    number: String,

    /// Skip the fact service and use the locally synthesized fun fact
    #[arg(long)]
    offline: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let facts: Box<dyn FactSource> = if options.offline {
        Box::new(OfflineFacts)
    } else {
        Box::new(NumbersApiClient::new(
            global.facts_url.clone(),
            global.fact_timeout(),
        )?)
    };

    if global.verbose {
        eprintln!("Classifying {:?}...", options.number);
    }

    let response = classify_number_data(&options.number, facts.as_ref()).await?;

    if options.json {
        output_json(&response)?;
    } else {
        output_formatted(&response);
    }

    if response.is_error() {
        return Err(eyre!("Invalid number: {:?}", options.number));
    }

    Ok(())
}

/// Parse, classify and attach a fun fact
///
/// Shared by the HTTP handler and the `classify` subcommand. Malformed input
/// short-circuits before any fact lookup. Classification runs on the blocking
/// pool so it never holds an async worker.
pub async fn classify_number_data(raw: &str, facts: &dyn FactSource) -> Result<NumberResponse> {
    let number = match parse_number(raw) {
        Ok(number) => number,
        Err(e) => {
            log::debug!("Rejecting classify request: {e}");
            return Ok(NumberResponse::Invalid(invalid_number_response(raw)));
        }
    };

    let classification = tokio::task::spawn_blocking(move || classify(number))
        .await
        .map_err(|e| eyre!("Classification of {number} failed: {e}"))?;
    let fun_fact = resolve_fun_fact(facts, &classification).await;

    Ok(NumberResponse::Classified(build_classification_response(
        classification,
        fun_fact,
    )))
}

fn format_classification_json(response: &NumberResponse) -> Result<String> {
    serde_json::to_string_pretty(response).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn format_classification_text(response: &ClassificationResponse) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("NUMBER {}", response.number).bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));

    let properties = response
        .properties
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = new_table();
    table.add_row(prettytable::row!["Prime", yes_no(response.is_prime)]);
    table.add_row(prettytable::row!["Perfect", yes_no(response.is_perfect)]);
    table.add_row(prettytable::row!["Properties", properties]);
    table.add_row(prettytable::row!["Digit sum", response.digit_sum]);
    result.push_str(&format!("\n{table}"));

    result.push_str(&format!(
        "\n{}: {}\n",
        "Fun fact".green().bold(),
        response.fun_fact
    ));

    result
}

fn format_invalid_text(response: &InvalidNumberResponse) -> String {
    format!(
        "{} {:?} is not a valid integer\n",
        "Error:".red().bold(),
        response.number
    )
}

fn output_json(response: &NumberResponse) -> Result<()> {
    let json = format_classification_json(response)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(response: &NumberResponse) {
    match response {
        NumberResponse::Classified(classified) => {
            print!("{}", format_classification_text(classified))
        }
        NumberResponse::Invalid(invalid) => eprintln!("{}", format_invalid_text(invalid)),
    }
}
