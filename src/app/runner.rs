use crate::adapters::{HttpTextSource, LocalTextSource, ShellCommandRunner};
use crate::config::{DrillCommand, TomlConfig};
use crate::core::alpha_order::is_alpha_order;
use crate::core::banner::greeting;
use crate::core::braces::max_nested_braces;
use crate::core::digits::len_int;
use crate::core::exit_status::report_commands;
use crate::core::longest_word::LongestWordFinder;
use crate::core::numeric::{parse_str, to_num};
use crate::core::one_char_diff::is_one_char_diff;
use crate::core::order_stat::{nth_lowest, nth_lowest_char};
use crate::core::product::product;
use crate::core::slices::word_slices;
use crate::core::{Number, Value};
use crate::utils::error::Result;

/// 執行單一子命令，回傳要印到 stdout 的文字
///
/// exit-status 邊執行邊輸出，回傳空字串
pub async fn run_command(command: &DrillCommand, settings: &TomlConfig) -> Result<String> {
    match command {
        DrillCommand::Digits { value, json } => {
            let input = parse_input(value, *json, Value::from_cli_token)?;
            Ok(len_int(&input)?.to_string())
        }
        DrillCommand::Num { value, json } => {
            let input = parse_input(value, *json, |raw| Value::Str(raw.to_string()))?;
            let number = to_num(&input)?;
            Ok(format!("{} ({})", number, number.kind()))
        }
        DrillCommand::Product { numbers } => {
            let parsed = parse_numbers(numbers)?;
            Ok(product(parsed).to_string())
        }
        DrillCommand::NthLowest { items, rank, text } => {
            let rank = rank.unwrap_or_else(|| settings.default_rank());
            tracing::debug!("Picking rank {} from {} items", rank, items.len());
            if *text {
                Ok(nth_lowest_char(&items.concat(), rank)?.to_string())
            } else {
                Ok(nth_lowest(&parse_numbers(items)?, rank)?.to_string())
            }
        }
        DrillCommand::Slices { word } => Ok(format!("{:?}", word_slices(word))),
        DrillCommand::OneCharDiff { first, second } => {
            Ok(is_one_char_diff(first, second).to_string())
        }
        DrillCommand::AlphaOrder { text } => Ok(is_alpha_order(text).to_string()),
        DrillCommand::Braces { expr } => Ok(max_nested_braces(expr).to_string()),
        DrillCommand::LongestWord { locator, remote } => {
            let local = match settings.base_dir() {
                Some(base_dir) => LocalTextSource::with_base_path(base_dir),
                None => LocalTextSource::new(),
            };
            let http = HttpTextSource::new(settings.timeout(), settings.user_agent())?;
            let finder = LongestWordFinder::new(local, http);
            finder.find(locator, *remote).await
        }
        DrillCommand::Greeting {
            msg,
            style_char,
            fill,
        } => {
            let mut style = settings.greeting_style()?;
            if let Some(c) = style_char {
                style = style.with_style_char(*c);
            }
            if let Some(fill) = fill {
                style = style.with_fill(*fill);
            }
            Ok(greeting(msg, &style))
        }
        DrillCommand::ExitStatus { commands } => {
            let mut stdout = std::io::stdout();
            report_commands(&ShellCommandRunner::default(), commands, &mut stdout).await?;
            Ok(String::new())
        }
    }
}

fn parse_input(raw: &str, json: bool, fallback: impl Fn(&str) -> Value) -> Result<Value> {
    if json {
        Value::from_json_str(raw)
    } else {
        Ok(fallback(raw))
    }
}

fn parse_numbers(raw: &[String]) -> Result<Vec<Number>> {
    raw.iter().map(|s| parse_str(s)).collect()
}
