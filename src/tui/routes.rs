/// A screen address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Week1,
    Setup,
    ApiIntegration,
    Chat,
}

const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/week-1", Route::Week1),
    ("/week-1/setup", Route::Setup),
    ("/week-1/api-integration", Route::ApiIntegration),
    ("/week-1/chat", Route::Chat),
];

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Week1,
        Route::Setup,
        Route::ApiIntegration,
        Route::Chat,
    ];

    /// Looks `path` up in the route table. A trailing slash is ignored.
    pub fn resolve(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, route)| *route)
    }

    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(path, _)| *path)
            .unwrap_or("/")
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Course",
            Route::Week1 => "Week 1",
            Route::Setup => "Setup Guide",
            Route::ApiIntegration => "API Integration",
            Route::Chat => "Ollama Chat",
        }
    }

    /// Screen that Esc returns to.
    pub fn parent(self) -> Option<Route> {
        match self {
            Route::Home => None,
            Route::Week1 => Some(Route::Home),
            Route::Setup | Route::ApiIntegration | Route::Chat => Some(Route::Week1),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::Week1 => 1,
            Route::Setup => 2,
            Route::ApiIntegration => 3,
            Route::Chat => 4,
        }
    }

    /// Route bound to the digit shortcut `1` to `5`, in tab order.
    pub fn from_digit(digit: char) -> Option<Route> {
        let index = digit.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve(""), Some(Route::Home));
        assert_eq!(Route::resolve("/week-1"), Some(Route::Week1));
        assert_eq!(Route::resolve("/week-1/"), Some(Route::Week1));
        assert_eq!(Route::resolve("/week-1/setup"), Some(Route::Setup));
        assert_eq!(
            Route::resolve("/week-1/api-integration/"),
            Some(Route::ApiIntegration)
        );
        assert_eq!(Route::resolve("/week-1/chat"), Some(Route::Chat));
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(Route::resolve("/week-2"), None);
        assert_eq!(Route::resolve("/week-1/setup-guide"), None);
        assert_eq!(Route::resolve("week-1"), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn test_index_matches_tab_order() {
        for (i, route) in Route::ALL.iter().enumerate() {
            assert_eq!(route.index(), i);
        }
    }

    #[test]
    fn test_digit_shortcuts() {
        assert_eq!(Route::from_digit('1'), Some(Route::Home));
        assert_eq!(Route::from_digit('3'), Some(Route::Setup));
        assert_eq!(Route::from_digit('5'), Some(Route::Chat));
        assert_eq!(Route::from_digit('0'), None);
        assert_eq!(Route::from_digit('6'), None);
        assert_eq!(Route::from_digit('x'), None);
    }

    #[test]
    fn test_parents() {
        assert_eq!(Route::Chat.parent(), Some(Route::Week1));
        assert_eq!(Route::Setup.parent(), Some(Route::Week1));
        assert_eq!(Route::ApiIntegration.parent(), Some(Route::Week1));
        assert_eq!(Route::Home.parent(), None);
    }
}
