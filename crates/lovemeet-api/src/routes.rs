use url::Url;

/// Hash routes of the app. Both `/share/:id` and `/proposal/:id` open the
/// recipient view and resolve the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    DatePlanner,
    Propose,
    History,
    Share { id: String, data: Option<String> },
    Proposal { id: String, data: Option<String> },
}

impl Route {
    /// Parse a full URL (`https://host/#/share/id?data=...`) or a bare
    /// fragment (`#/share/id`). Returns `None` for unknown routes.
    ///
    /// `data` is read from the fragment's own query first and from the
    /// URL's main query string second, since some older links put it there.
    pub fn parse(input: &str) -> Option<Route> {
        let input = input.trim();
        let (fragment, outer_query) = match Url::parse(input) {
            Ok(url) => (
                url.fragment().unwrap_or("").to_string(),
                url.query().map(str::to_string),
            ),
            Err(_) => (input.trim_start_matches('#').to_string(), None),
        };

        let (path, inner_query) = match fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (fragment.as_str(), None),
        };

        let data = inner_query
            .and_then(data_param)
            .or_else(|| outer_query.as_deref().and_then(data_param));

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["date-planner"] => Some(Route::DatePlanner),
            ["propose"] => Some(Route::Propose),
            ["history"] => Some(Route::History),
            ["share", id] => Some(Route::Share {
                id: decode_segment(id),
                data,
            }),
            ["proposal", id] => Some(Route::Proposal {
                id: decode_segment(id),
                data,
            }),
            _ => None,
        }
    }

    /// Fragment path for this route, including the `data` parameter when set.
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::DatePlanner => "/date-planner".to_string(),
            Route::Propose => "/propose".to_string(),
            Route::History => "/history".to_string(),
            Route::Share { id, data } => with_data(format!("/share/{}", urlencoding::encode(id)), data),
            Route::Proposal { id, data } => {
                with_data(format!("/proposal/{}", urlencoding::encode(id)), data)
            }
        }
    }

    /// Absolute URL under `base` (scheme + host, no trailing fragment).
    pub fn to_url(&self, base: &str) -> String {
        format!("{}/#{}", base.trim_end_matches('/'), self.to_fragment())
    }

    /// Id and embedded token for the recipient routes.
    pub fn recipient_target(&self) -> Option<(&str, Option<&str>)> {
        match self {
            Route::Share { id, data } | Route::Proposal { id, data } => {
                Some((id.as_str(), data.as_deref()))
            }
            _ => None,
        }
    }
}

fn with_data(path: String, data: &Option<String>) -> String {
    match data {
        Some(token) => format!("{path}?data={}", urlencoding::encode(token)),
        None => path,
    }
}

fn data_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "data")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
