//! Production bundler configuration patch.
//!
//! The CSS minimizer shipped by the bundling pipeline runs an SVG optimizer
//! whose default pass set can corrupt SVGs embedded in stylesheets. During
//! the production bundling stage, the minimizer entry is swapped for one
//! carrying an explicit pass allow-list. Every other stage leaves the
//! configuration untouched.

/// Lifecycle stages the bundling pipeline runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// Development server.
    Develop,
    /// HTML generation during development.
    DevelopHtml,
    /// Production JS and CSS bundling. The only stage the patch applies to.
    BuildJavascript,
    /// Production HTML generation.
    BuildHtml,
}

/// Options of the CSS minimizer entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssMinimizerOptions {
    /// Name of the optimization preset the minimizer starts from.
    pub preset: String,
    /// Whether the embedded SVG optimizer runs as a full pipeline of
    /// explicitly listed passes instead of its defaults.
    pub svg_full: bool,
    /// SVG optimization passes to run. Empty means the optimizer's defaults.
    pub svg_passes: Vec<&'static str>,
}

impl Default for CssMinimizerOptions {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
            svg_full: false,
            svg_passes: Vec::new(),
        }
    }
}

impl CssMinimizerOptions {
    /// The configuration the patch installs: default preset, SVG pipeline
    /// restricted to [`SAFE_SVG_PASSES`].
    pub fn curated() -> Self {
        Self {
            preset: "default".to_string(),
            svg_full: true,
            svg_passes: SAFE_SVG_PASSES.to_vec(),
        }
    }
}

/// Options of the JS minimizer entry. The patch never touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsMinimizerOptions {
    pub compress: bool,
    pub mangle: bool,
}

/// One minimizer of the bundler's optimization phase, tagged by the asset
/// kind it handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Minimizer {
    Js(JsMinimizerOptions),
    Css(CssMinimizerOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationOptions {
    pub minimizers: Vec<Minimizer>,
}

/// The slice of the bundler configuration the patch operates on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundlerConfig {
    pub optimization: OptimizationOptions,
}

/// SVG optimization passes that are safe to run on stylesheet-embedded SVGs.
///
/// Passes that drop or rewrite referenced definitions and styles
/// (`removeUselessDefs`, `convertStyleToAttrs`, `inlineStyles`,
/// `minifyStyles`, `removeStyleElement`, `removeUselessStrokeAndFill`) are
/// deliberately excluded.
pub const SAFE_SVG_PASSES: &[&str] = &[
    "cleanupAttrs",
    "cleanupEnableBackground",
    "cleanupIDs",
    "cleanupListOfValues",
    "cleanupNumericValues",
    "collapseGroups",
    "convertColors",
    "convertPathData",
    "convertTransform",
    "mergePaths",
    "moveElemsAttrsToGroup",
    "moveGroupAttrsToElems",
    "prefixIds",
    "removeAttrs",
    "removeComments",
    "removeDesc",
    "removeDimensions",
    "removeDoctype",
    "removeEditorsNSData",
    "removeEmptyAttrs",
    "removeEmptyContainers",
    "removeEmptyText",
    "removeHiddenElems",
    "removeMetadata",
    "removeNonInheritableGroupAttrs",
    "removeOffCanvasPaths",
    "removeRasterImages",
    "removeScriptElement",
    "removeTitle",
    "removeUnknownsAndDefaults",
    "removeUnusedNS",
    "removeXMLProcInst",
    "reusePaths",
    "sortAttrs",
];

/// Replaces the CSS minimizer with the curated configuration during the
/// production bundling stage.
///
/// Outside that stage, or when the configuration holds no CSS minimizer, the
/// input is returned unchanged. One-shot and order-independent: the result
/// only depends on the given configuration and stage.
pub fn patch_css_minifier(mut config: BundlerConfig, stage: BuildStage) -> BundlerConfig {
    if stage != BuildStage::BuildJavascript {
        return config;
    }

    let minimizers = &mut config.optimization.minimizers;
    if let Some(index) = minimizers
        .iter()
        .position(|entry| matches!(entry, Minimizer::Css(_)))
    {
        minimizers[index] = Minimizer::Css(CssMinimizerOptions::curated());
    }

    config
}
