use crate::prelude::{println, *};
use chrono::Utc;
use colored::Colorize;
use numclass_core::info::{build_info, Identity, InfoOutput};

#[derive(Debug, clap::Args, Clone)]
pub struct InfoOptions {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(options: InfoOptions, global: crate::Global) -> Result<()> {
    let info = info_data(&global.identity());

    if options.json {
        let json = serde_json::to_string_pretty(&info)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_info_text(&info));
    }

    Ok(())
}

/// Identity payload stamped with the current time
pub fn info_data(identity: &Identity) -> InfoOutput {
    build_info(identity, Utc::now())
}

fn format_info_text(info: &InfoOutput) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}\n",
        "Email".green(),
        info.email.bright_white(),
        "GitHub".green(),
        info.github_url.cyan().underline(),
        "Time".green(),
        info.current_datetime.bright_black()
    )
}
