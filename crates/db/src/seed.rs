//! Default catalogue inserted at startup.
//!
//! Each table is checked independently and only seeded when it is empty, so
//! running [`seed_defaults`] on every boot is safe. Two instances starting
//! against an empty database at the same moment can race; the unique name
//! constraints make the loser fail instead of duplicating rows.

use rust_decimal::Decimal;
use serde_json::json;

use crate::models::plan::CreatePlan;
use crate::models::template::CreateTemplate;
use crate::repositories::{PlanRepo, TemplateRepo};
use crate::DbPool;

/// What [`seed_defaults`] inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub plans_inserted: usize,
    pub templates_inserted: usize,
}

/// The plans offered out of the box.
pub fn default_plans() -> Vec<CreatePlan> {
    vec![
        CreatePlan {
            name: "Plan A - Landing Page".to_string(),
            price: Decimal::new(17500, 2),
            description: Some("Starter plan for a professional landing page".to_string()),
            features: Some(json!({
                "pages": 1,
                "templates": "basic",
                "custom_domain": true,
                "hosting_included": true
            })),
        },
        CreatePlan {
            name: "Plan B - Simple Website".to_string(),
            price: Decimal::new(25000, 2),
            description: Some("Complete plan for a four-page website".to_string()),
            features: Some(json!({
                "pages": 4,
                "templates": "premium",
                "custom_domain": true,
                "hosting_included": true,
                "contact_forms": true
            })),
        },
    ]
}

/// The templates offered out of the box.
pub fn default_templates() -> Vec<CreateTemplate> {
    vec![
        CreateTemplate {
            name: "Basic Template - Business".to_string(),
            preview_image_url: Some("/static/templates/basic-business-preview.jpg".to_string()),
            grapesjs_json: Some(json!({
                "html": "<div class=\"container\"><h1>My Business</h1><p>Describe your business</p></div>",
                "css": ".container { max-width: 1200px; margin: 0 auto; padding: 20px; }",
                "components": [],
                "styles": []
            })),
        },
        CreateTemplate {
            name: "Modern Template - Services".to_string(),
            preview_image_url: Some("/static/templates/modern-services-preview.jpg".to_string()),
            grapesjs_json: Some(json!({
                "html": "<div class=\"hero\"><h1>Our Services</h1><p>Professional solutions</p></div>",
                "css": ".hero { background: linear-gradient(45deg, #667eea 0%, #764ba2 100%); color: white; padding: 60px 20px; text-align: center; }",
                "components": [],
                "styles": []
            })),
        },
    ]
}

/// Insert the default plans and templates into whichever tables are empty.
pub async fn seed_defaults(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    if PlanRepo::count(pool).await? == 0 {
        for plan in default_plans() {
            PlanRepo::create(pool, &plan).await?;
            report.plans_inserted += 1;
        }
        tracing::info!(count = report.plans_inserted, "Seeded default plans");
    }

    if TemplateRepo::count(pool).await? == 0 {
        for template in default_templates() {
            TemplateRepo::create(pool, &template).await?;
            report.templates_inserted += 1;
        }
        tracing::info!(count = report.templates_inserted, "Seeded default templates");
    }

    Ok(report)
}
