use rand::Rng;

use crate::palette::ColorResolver;

use super::chart_config::SeriesConfig;

/// Resolves colors for a whole series list in one pass.
///
/// Named categorical series go through the category tables; pass `None`
/// to draw every series from the default series palette instead.
pub fn assign_series_colors<R: Rng>(
    keys: &[&str],
    category: Option<&str>,
    resolver: &mut ColorResolver<R>,
) -> Vec<SeriesConfig> {
    keys.iter()
        .map(|key| {
            let colors = match category {
                Some(category) => resolver.resolve(category, key),
                None => resolver.allocate_series(),
            };
            SeriesConfig::new(*key, colors)
        })
        .collect()
}
