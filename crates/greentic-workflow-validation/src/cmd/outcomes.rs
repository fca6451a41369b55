use anyhow::Result;
use clap::Args;

use crate::i18n::Localizer;
use crate::rule::RequiredWhenChecked;

#[derive(Args, Debug, Clone)]
pub struct OutcomesArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: OutcomesArgs, localizer: &Localizer) -> Result<()> {
    let labels: Vec<(String, String)> = RequiredWhenChecked::possible_outcomes()
        .iter()
        .map(|outcome| {
            (
                outcome.as_str().to_string(),
                localizer.tr_key(outcome.i18n_key()),
            )
        })
        .collect();

    if args.json {
        let payload: serde_json::Map<String, serde_json::Value> = labels
            .into_iter()
            .map(|(id, label)| (id, serde_json::Value::String(label)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", localizer.tr_key("cli.outcomes.header"));
    for (id, label) in labels {
        println!("  {id}: {label}");
    }
    Ok(())
}
