use anyhow::Result;
use clap::Args;

use crate::descriptor;
use crate::i18n::Localizer;

#[derive(Args, Debug, Clone)]
pub struct DescribeArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: DescribeArgs, localizer: &Localizer) -> Result<()> {
    let localized = descriptor::required_when_checked().localize(localizer);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&localized)?);
        return Ok(());
    }
    println!(
        "{}",
        localizer.tr_args("cli.describe.name", &[("name", &localized.name)])
    );
    println!(
        "{}",
        localizer.tr_args("cli.describe.display_text", &[("text", &localized.display_text)])
    );
    println!(
        "{}",
        localizer.tr_args("cli.describe.category", &[("category", &localized.category)])
    );
    for property in &localized.properties {
        println!("  {}: {}", property.id, property.label);
    }
    Ok(())
}
