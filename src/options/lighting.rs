use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Point Light", inline)]
#[serde(default)]
/// A single Phong point light.
pub struct PointLightOptions {
    /// Light color.
    #[schemars(skip)]
    pub color: [f32; 3],
    /// World-space light position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Ambient contribution scale.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Specular contribution scale.
    #[schemars(title = "Specular", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub specular: f32,
    /// Specular exponent.
    #[schemars(title = "Highlight Size", range(min = 1.0, max = 128.0), extend("step" = 1.0))]
    pub highlight: f32,
}

impl Default for PointLightOptions {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            position: [0.0, 0.5, -3.0],
            ambient: 0.1,
            specular: 1.0,
            highlight: 16.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Key and fill lights for the Phong shader.
pub struct LightingOptions {
    /// Primary light.
    pub key: PointLightOptions,
    /// Secondary light.
    pub fill: PointLightOptions,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            key: PointLightOptions {
                color: [1.0, 0.0, 0.0],
                ..PointLightOptions::default()
            },
            fill: PointLightOptions {
                position: [-3.0, 0.5, 0.0],
                specular: 0.1,
                ..PointLightOptions::default()
            },
        }
    }
}
