//! Static landing-page content.
//!
//! Everything here is inert copy; the shells render it however they like.

use serde::{Deserialize, Serialize};

/// One card of the deployment guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStep {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl DeploymentStep {
    fn new(title: &str, description: &str, command: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            command: command.map(str::to_string),
        }
    }
}

/// Copy shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub brand: String,
    pub version: String,
    pub hero_headline: String,
    pub hero_tagline: String,
    pub hero_blurb: String,
    pub widget_title: String,
    pub widget_subtitle: String,
    pub widget_placeholder: String,
    pub deploy_heading: String,
    pub steps: Vec<DeploymentStep>,
    pub footer_title: String,
    pub footer_blurb: String,
    pub copyright: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            brand: "안녕하세요".to_string(),
            version: "v1.0.0".to_string(),
            hero_headline: "Modern Web Apps".to_string(),
            hero_tagline: "Deployed in Seconds.".to_string(),
            hero_blurb: "The perfect template for your next project. Combining the speed of Vite, the power of Gemini AI, and the reliability of Vercel.".to_string(),
            widget_title: "Smart Idea Generator".to_string(),
            widget_subtitle: "Powered by Gemini 3 Flash. Enter a theme to generate your next big app idea.".to_string(),
            widget_placeholder: "e.g. Sustainable Living, Music Education...".to_string(),
            deploy_heading: "Ready for Vercel".to_string(),
            steps: deployment_steps(),
            footer_title: "VercelVite Showcase".to_string(),
            footer_blurb: "Built with React, Vite, Tailwind and Gemini API.".to_string(),
            copyright: "© 2024 AI Solutions Inc.".to_string(),
        }
    }
}

/// The four-step deployment guide.
pub fn deployment_steps() -> Vec<DeploymentStep> {
    vec![
        DeploymentStep::new(
            "Initialize Vite",
            "Set up your React project with TypeScript using the Vite CLI.",
            Some("npm create vite@latest"),
        ),
        DeploymentStep::new(
            "Push to GitHub",
            "Create a repository and push your local code to the cloud.",
            Some("git push origin main"),
        ),
        DeploymentStep::new(
            "Connect to Vercel",
            "Import your repository into Vercel dashboard and configure Environment Variables.",
            None,
        ),
        DeploymentStep::new(
            "Deploy",
            "Vercel automatically builds and deploys your application on every push.",
            None,
        ),
    ]
}
