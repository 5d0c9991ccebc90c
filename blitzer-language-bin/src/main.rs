use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use blitzer_language::fetch::HttpFetcher;
use blitzer_language::LanguagePlugin;

mod plugins;
mod settings;

use crate::plugins::{find_plugin, PLUGINS};
use crate::settings::Settings;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Registration {
    language: String,
    db_path: PathBuf,
    normalizer: bool,
    tokenizer: bool,
    custom_lemmatizer: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PluginInfo {
    code: &'static str,
    aliases: &'static [&'static str],
    name: &'static str,
    url: &'static str,
    normalizer: bool,
}

trait OutputWriter {
    fn write_registration(&mut self, registration: Registration);
    fn write_plugin(&mut self, info: PluginInfo);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

fn yes_no(value: bool) -> &'static str {
    if value {
        "custom"
    } else {
        "host default"
    }
}

impl OutputWriter for StdoutWriter {
    fn write_registration(&mut self, registration: Registration) {
        println!("Language:\t{}", registration.language);
        println!("Database:\t{}", registration.db_path.display());
        println!("Normalizer:\t{}", yes_no(registration.normalizer));
        println!("Tokenizer:\t{}", yes_no(registration.tokenizer));
        println!("Lemmatizer:\t{}", yes_no(registration.custom_lemmatizer));
        println!();
    }

    fn write_plugin(&mut self, info: PluginInfo) {
        println!(
            "{}\t{}\t{}\t{}",
            info.code,
            info.aliases.join(","),
            info.name,
            info.url
        );
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct JsonWriter {
    registrations: Vec<Registration>,
    plugins: Vec<PluginInfo>,
}

impl OutputWriter for JsonWriter {
    fn write_registration(&mut self, registration: Registration) {
        self.registrations.push(registration);
    }

    fn write_plugin(&mut self, info: PluginInfo) {
        self.plugins.push(info);
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let out = if self.plugins.is_empty() {
            serde_json::to_string_pretty(&self.registrations)?
        } else {
            serde_json::to_string_pretty(&self.plugins)?
        };
        println!("{}", out);
        Ok(())
    }
}

fn writer(use_json: bool) -> Box<dyn OutputWriter> {
    if use_json {
        Box::new(JsonWriter::default())
    } else {
        Box::new(StdoutWriter)
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "resolve (and download if needed) lemma databases and print the configuration")]
    Register(RegisterArgs),

    #[options(help = "normalize text the way a plugin does before lookup")]
    Normalize(NormalizeArgs),

    #[options(help = "list available language plugins")]
    List(ListArgs),
}

#[derive(Debug, Options)]
struct RegisterArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON settings file (cache root, timeouts, retries)")]
    config: Option<PathBuf>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "language tags, e.g. pli or sl")]
    tags: Vec<String>,
}

#[derive(Debug, Options)]
struct NormalizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(required, help = "language tag, e.g. pli or sl")]
    lang: String,

    #[options(free, help = "text to be normalized")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct ListArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,
}

fn register(args: RegisterArgs) -> anyhow::Result<()> {
    if args.tags.is_empty() {
        anyhow::bail!("No language tags passed.");
    }

    let settings = Settings::load(args.config.as_deref())?;
    let fetcher = HttpFetcher::new(settings.fetch.clone())?;
    let mut writer = writer(args.use_json);

    for tag in &args.tags {
        let plugin = find_plugin(tag)?;
        let ctx = settings.storage_context(plugin)?;
        let config = plugin
            .register_with(&ctx, &fetcher)
            .with_context(|| format!("Registering {} plugin", plugin.name()))?;

        writer.write_registration(Registration {
            language: plugin.code().to_string(),
            db_path: config.db_path().to_path_buf(),
            normalizer: config.normalizer().is_some(),
            tokenizer: config.tokenizer().is_some(),
            custom_lemmatizer: config.custom_lemmatizer().is_some(),
        });
    }

    writer.finish()
}

fn normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let plugin = find_plugin(&args.lang)?;

    let lines: Vec<String> = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer.lines().map(str::to_string).collect()
    } else {
        vec![args.inputs.join(" ")]
    };

    for line in lines {
        println!("{}", normalize_with(plugin, &line));
    }

    Ok(())
}

fn normalize_with(plugin: &dyn LanguagePlugin, text: &str) -> String {
    match plugin.normalizer() {
        Some(f) => f(text),
        None => text.to_string(),
    }
}

fn list(args: ListArgs) -> anyhow::Result<()> {
    let mut writer = writer(args.use_json);

    for plugin in PLUGINS.iter() {
        writer.write_plugin(PluginInfo {
            code: plugin.code(),
            aliases: plugin.aliases(),
            name: plugin.name(),
            url: plugin.source().url,
            normalizer: plugin.normalizer().is_some(),
        });
    }

    writer.finish()
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => {
            eprintln!("{}", Args::usage());
            Ok(())
        }
        Some(Command::Register(args)) => register(args),
        Some(Command::Normalize(args)) => normalize(args),
        Some(Command::List(args)) => list(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blitzer_language_pli::Pali;
    use blitzer_language_slv::Slovenian;

    #[test]
    fn test_normalize_with_plugin() {
        assert_eq!(normalize_with(&Pali, "evaṁ me sutaṁ"), "evaṃ me sutaṃ");
        assert_eq!(normalize_with(&Slovenian, "don’t"), "don’t");
    }

    #[test]
    fn test_registration_json_shape() {
        let registration = Registration {
            language: "pli".into(),
            db_path: PathBuf::from("/home/a/.blitzer_language_pli/lemmas.db"),
            normalizer: true,
            tokenizer: false,
            custom_lemmatizer: false,
        };

        let json = serde_json::to_value(&registration).unwrap();

        assert_eq!(json["dbPath"], "/home/a/.blitzer_language_pli/lemmas.db");
        assert_eq!(json["normalizer"], true);
        assert_eq!(json["customLemmatizer"], false);
    }
}
