use crate::parser::Rule;

/// One build target extracted from the database dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub prerequisites: Vec<String>,
    pub order_only_prerequisites: Vec<String>,
    pub recipe_lines: Vec<String>,
}

impl Rule {
    /// One [`Target`] per declared name; the names share the rule's
    /// prerequisite lists and recipe.
    pub fn into_targets(self) -> impl Iterator<Item = Target> {
        let Rule {
            targets,
            prerequisites,
            order_only,
            recipes,
        } = self;
        targets.into_iter().map(move |path| Target {
            path,
            prerequisites: prerequisites.clone(),
            order_only_prerequisites: order_only.clone(),
            recipe_lines: recipes.clone(),
        })
    }
}
