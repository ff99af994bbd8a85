use wfgraph_instance::Recipe;

pub fn list_recipes() -> String {
    let width = Recipe::ALL
        .iter()
        .map(|recipe| recipe.name().len())
        .max()
        .unwrap_or_default();

    Recipe::ALL
        .iter()
        .map(|recipe| format!("{:<width$}  {}\n", recipe.name(), recipe.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_recipe() {
        let listing = list_recipes();
        assert_eq!(listing.lines().count(), Recipe::ALL.len());
        assert!(listing.starts_with("montage "));
        assert!(listing.contains("soykb "));
    }
}
