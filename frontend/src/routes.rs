use yew_router::prelude::*;

/// Page routes, relative to the configured base path
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/create-life-plan")]
    CreateLifePlan,
    #[at("/:lifeplan_id/expenses/:year")]
    Expenses { lifeplan_id: u32, year: i32 },
    #[at("/income-input")]
    IncomeInput,
    #[at("/income-input/salary")]
    Salary,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `basename` value for the router; the root path needs none
pub fn router_basename(base_path: &str) -> Option<String> {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Where to send a visit to the bare base path (`/lifeplan` rather than
/// `/lifeplan/`); the router cannot match it against the home route.
pub fn bare_base_redirect(pathname: &str, base_path: &str) -> Option<String> {
    let basename = router_basename(base_path)?;
    (pathname == basename).then(|| format!("{}/", basename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/create-life-plan"), Some(Route::CreateLifePlan));
        assert_eq!(Route::recognize("/income-input"), Some(Route::IncomeInput));
        assert_eq!(Route::recognize("/income-input/salary"), Some(Route::Salary));
    }

    #[test]
    fn test_expense_dashboard_route() {
        assert_eq!(
            Route::recognize("/3/expenses/2025"),
            Some(Route::Expenses { lifeplan_id: 3, year: 2025 })
        );
        assert_eq!(
            Route::Expenses { lifeplan_id: 1, year: 2024 }.to_path(),
            "/1/expenses/2024"
        );
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/abc/expenses/2025"), Some(Route::NotFound));
    }

    #[test]
    fn test_router_basename() {
        assert_eq!(router_basename("/lifeplan"), Some("/lifeplan".to_string()));
        assert_eq!(router_basename("lifeplan/"), Some("/lifeplan".to_string()));
        assert_eq!(router_basename("/"), None);
    }

    #[test]
    fn test_bare_base_path_redirects_to_home() {
        let target = bare_base_redirect("/lifeplan", "/lifeplan").unwrap();
        assert_eq!(target, "/lifeplan/");
        assert_eq!(
            Route::recognize(target.strip_prefix("/lifeplan").unwrap()),
            Some(Route::Home)
        );
        assert_eq!(bare_base_redirect("/lifeplan", "lifeplan/"), Some("/lifeplan/".to_string()));
    }

    #[test]
    fn test_other_paths_are_not_redirected() {
        assert_eq!(bare_base_redirect("/lifeplan/", "/lifeplan"), None);
        assert_eq!(bare_base_redirect("/lifeplan/income-input", "/lifeplan"), None);
        assert_eq!(bare_base_redirect("/lifeplanner", "/lifeplan"), None);
        assert_eq!(bare_base_redirect("/", "/"), None);
    }
}
