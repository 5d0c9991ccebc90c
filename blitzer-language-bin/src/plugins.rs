use anyhow::anyhow;
use language_tags::LanguageTag;

use blitzer_language::LanguagePlugin;
use blitzer_language_pli::Pali;
use blitzer_language_slv::Slovenian;

pub static PLUGINS: [&(dyn LanguagePlugin + Sync); 2] = [&Pali, &Slovenian];

/// Find the plugin for a BCP 47 tag by its primary language subtag.
pub fn find_plugin(tag: &str) -> anyhow::Result<&'static (dyn LanguagePlugin + Sync)> {
    let parsed =
        LanguageTag::parse(tag).map_err(|e| anyhow!("Invalid language tag {:?}: {:?}", tag, e))?;
    let primary = parsed.primary_language();

    PLUGINS
        .iter()
        .copied()
        .find(|plugin| plugin.matches(primary))
        .ok_or_else(|| anyhow!("No plugin for language {:?}", primary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_by_code_and_alias() {
        assert_eq!(find_plugin("pli").unwrap().code(), "pli");
        assert_eq!(find_plugin("pi").unwrap().code(), "pli");
        assert_eq!(find_plugin("sl").unwrap().code(), "slv");
        assert_eq!(find_plugin("sl-SI").unwrap().code(), "slv");
    }

    #[test]
    fn test_unknown_language() {
        let err = find_plugin("se").err().unwrap();
        assert_eq!(err.to_string(), "No plugin for language \"se\"");
    }

    #[test]
    fn test_invalid_tag() {
        assert!(find_plugin("not a tag").is_err());
    }
}
