use anyhow::{Context, Result};
use kostplan::cli::{parse_args, read_user_input};
use kostplan::plan::generate_plan;

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();
    eprintln!("Reading user input from: {}", cli_args.input_file);

    let input = read_user_input(&cli_args.input_file).await?;
    eprintln!("Generating plan for '{}'...", input.name);

    let plan = generate_plan(&input);

    let json = if cli_args.pretty {
        serde_json::to_string_pretty(&plan)
    } else {
        serde_json::to_string(&plan)
    }
    .context("Failed to serialize the generated plan")?;

    println!("{}", json);
    Ok(())
}
