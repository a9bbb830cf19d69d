use std::sync::Arc;

use minijinja::context;

use crate::core::config::MapConfig;
use crate::core::error::Result;
use crate::shared::constants::{INDEX_TEMPLATE, POINTS_PATH, SAVE_POINT_PATH};
use crate::shared::templates::TemplateEngine;

/// Renders the map shell page
pub struct MapPageService {
    templates: Arc<TemplateEngine>,
    map: MapConfig,
}

impl MapPageService {
    pub fn new(templates: Arc<TemplateEngine>, map: MapConfig) -> Self {
        Self { templates, map }
    }

    pub fn render_index(&self) -> Result<String> {
        let html = self.templates.render(
            INDEX_TEMPLATE,
            context! {
                title => &self.map.title,
                center_lat => self.map.center_lat,
                center_lng => self.map.center_lng,
                zoom => self.map.zoom,
                points_url => POINTS_PATH,
                save_url => SAVE_POINT_PATH,
            },
        )?;

        Ok(html)
    }
}
