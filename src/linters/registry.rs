/// Static description of one quality tool: how to spot it and how to run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinterDescriptor {
    pub name: &'static str,
    /// Config file names that signal the linter is in use, in lookup order.
    pub config_files: &'static [&'static str],
    /// Check command template, split with shell-word rules before execution.
    pub check: &'static str,
    /// Fix command template. `None` when findings need manual edits.
    pub fix: Option<&'static str>,
    /// Whether `<name>-*` dependency keys (plugins, shared configs) imply the linter.
    pub plugin_prefixed: bool,
}

/// The catalog, in detection order.
pub const REGISTRY: &[LinterDescriptor] = &[
    LinterDescriptor {
        name: "eslint",
        config_files: &[
            ".eslintrc",
            ".eslintrc.js",
            ".eslintrc.json",
            ".eslintrc.yml",
            "eslint.config.js",
            "eslint.config.mjs",
        ],
        check: "eslint . --format stylish",
        fix: Some("eslint . --fix"),
        plugin_prefixed: true,
    },
    LinterDescriptor {
        name: "biome",
        config_files: &["biome.json", "biome.jsonc"],
        check: "biome check .",
        fix: Some("biome check . --fix"),
        plugin_prefixed: false,
    },
    LinterDescriptor {
        name: "prettier",
        config_files: &[
            ".prettierrc",
            ".prettierrc.js",
            ".prettierrc.json",
            "prettier.config.js",
        ],
        check: "prettier --check .",
        fix: Some("prettier --write ."),
        plugin_prefixed: true,
    },
    LinterDescriptor {
        name: "stylelint",
        config_files: &[
            ".stylelintrc",
            ".stylelintrc.js",
            ".stylelintrc.json",
            "stylelint.config.js",
        ],
        check: "stylelint '**/*.css'",
        fix: Some("stylelint '**/*.css' --fix"),
        plugin_prefixed: true,
    },
    LinterDescriptor {
        name: "tsc",
        config_files: &["tsconfig.json"],
        check: "tsc --noEmit",
        fix: None,
        plugin_prefixed: false,
    },
];

pub fn lookup(name: &str) -> Option<&'static LinterDescriptor> {
    REGISTRY.iter().find(|d| d.name == name)
}
