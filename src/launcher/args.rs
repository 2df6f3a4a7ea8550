//! Forwarded-argument handling.

const START_URL_FILTERS_FLAG: &str = "--start-url-filters";

/// Appends `--start-url-filters <value>` to the forwarded arguments unless
/// they already carry the flag in either `--flag value` or `--flag=value`
/// form. The filter value itself is opaque to the launcher.
pub fn merge_start_url_filters(mut args: Vec<String>, filter: Option<&str>) -> Vec<String> {
    let Some(filter) = filter else {
        return args;
    };
    if has_start_url_filters(&args) {
        return args;
    }
    args.push(START_URL_FILTERS_FLAG.to_string());
    args.push(filter.to_string());
    args
}

fn has_start_url_filters(args: &[String]) -> bool {
    args.iter().any(|arg| {
        arg.strip_prefix(START_URL_FILTERS_FLAG)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_appends_flag_and_value() {
        let merged = merge_start_url_filters(strings(&["--limit", "40"]), Some("[\"__SHOP__\"]"));
        assert_eq!(
            merged,
            strings(&["--limit", "40", "--start-url-filters", "[\"__SHOP__\"]"])
        );
    }

    #[test]
    fn test_no_filter_leaves_args_unchanged() {
        let merged = merge_start_url_filters(strings(&["--limit", "40"]), None);
        assert_eq!(merged, strings(&["--limit", "40"]));
    }

    #[test]
    fn test_existing_flag_suppresses_append() {
        let merged = merge_start_url_filters(
            strings(&["--start-url-filters", "[\"__GITLAB__\"]"]),
            Some("[\"__SHOP__\"]"),
        );
        assert_eq!(merged, strings(&["--start-url-filters", "[\"__GITLAB__\"]"]));
    }

    #[test]
    fn test_assignment_form_suppresses_append() {
        let merged = merge_start_url_filters(
            strings(&["--start-url-filters=__GITLAB__"]),
            Some("[\"__SHOP__\"]"),
        );
        assert_eq!(merged, strings(&["--start-url-filters=__GITLAB__"]));
    }

    #[test]
    fn test_similar_flag_does_not_suppress() {
        let merged = merge_start_url_filters(
            strings(&["--start-url-filters-extra", "x"]),
            Some("__SHOP__"),
        );
        assert_eq!(
            merged,
            strings(&["--start-url-filters-extra", "x", "--start-url-filters", "__SHOP__"])
        );
    }

    #[test]
    fn test_appends_to_empty_args() {
        let merged = merge_start_url_filters(Vec::new(), Some("__SHOP__"));
        assert_eq!(merged, strings(&["--start-url-filters", "__SHOP__"]));
    }
}
