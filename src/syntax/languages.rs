//! Built-in grammars
//!
//! Maps language aliases (fence names, file extensions) to the tree-sitter
//! grammar each one loads.

use tree_sitter::Language;

/// Languages with a bundled tree-sitter grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Yaml,
    Markdown,
    Rust,
    // Web stack
    Html,
    Css,
    JavaScript,
    TypeScript,
    Tsx,
    Json,
    Toml,
    // Common
    Python,
    Go,
    Php,
    // Extended
    C,
    Cpp,
    Java,
    Bash,
    CSharp,
    Kotlin,
    Ruby,
    Swift,
    Scala,
    Groovy,
    Lua,
    // Functional
    Elixir,
    Elm,
    OCaml,
    // Specialized
    Scheme,
    Ini,
    Xml,
    Hcl,
    Protobuf,
    Sql,
    Svelte,
}

impl LanguageId {
    /// Every bundled grammar, in registration order
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::Yaml,
        LanguageId::Markdown,
        LanguageId::Rust,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Tsx,
        LanguageId::Json,
        LanguageId::Toml,
        LanguageId::Python,
        LanguageId::Go,
        LanguageId::Php,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::Java,
        LanguageId::Bash,
        LanguageId::CSharp,
        LanguageId::Kotlin,
        LanguageId::Ruby,
        LanguageId::Swift,
        LanguageId::Scala,
        LanguageId::Groovy,
        LanguageId::Lua,
        LanguageId::Elixir,
        LanguageId::Elm,
        LanguageId::OCaml,
        LanguageId::Scheme,
        LanguageId::Ini,
        LanguageId::Xml,
        LanguageId::Hcl,
        LanguageId::Protobuf,
        LanguageId::Sql,
        LanguageId::Svelte,
    ];

    /// Lowercase aliases that resolve to this grammar.
    ///
    /// The first alias is the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Yaml => &["yaml", "yml"],
            LanguageId::Markdown => &["markdown", "md", "mkd"],
            LanguageId::Rust => &["rust", "rs"],
            LanguageId::Html => &["html", "htm", "xhtml"],
            LanguageId::Css => &["css"],
            LanguageId::JavaScript => &["javascript", "js", "jsx", "mjs", "cjs"],
            LanguageId::TypeScript => &["typescript", "ts", "mts", "cts"],
            LanguageId::Tsx => &["tsx"],
            LanguageId::Json => &["json"],
            LanguageId::Toml => &["toml"],
            LanguageId::Python => &["python", "py", "python3"],
            LanguageId::Go => &["go", "golang"],
            LanguageId::Php => &["php"],
            LanguageId::C => &["c", "h"],
            LanguageId::Cpp => &["cpp", "c++", "cxx", "cc", "hpp", "hxx"],
            LanguageId::Java => &["java"],
            LanguageId::Bash => &["bash", "sh", "shell", "zsh"],
            LanguageId::CSharp => &["csharp", "c#", "cs"],
            LanguageId::Kotlin => &["kotlin", "kt", "kts"],
            LanguageId::Ruby => &["ruby", "rb"],
            LanguageId::Swift => &["swift"],
            LanguageId::Scala => &["scala", "sc"],
            LanguageId::Groovy => &["groovy", "gradle"],
            LanguageId::Lua => &["lua"],
            LanguageId::Elixir => &["elixir", "ex", "exs"],
            LanguageId::Elm => &["elm"],
            LanguageId::OCaml => &["ocaml", "ml"],
            LanguageId::Scheme => &["scheme", "racket", "rkt", "scm"],
            LanguageId::Ini => &["ini", "cfg"],
            LanguageId::Xml => &["xml", "svg", "xsd", "xsl"],
            LanguageId::Hcl => &["hcl", "tf", "terraform"],
            LanguageId::Protobuf => &["protobuf", "proto"],
            LanguageId::Sql => &["sql"],
            LanguageId::Svelte => &["svelte"],
        }
    }

    /// Canonical (first) alias, used for `language-*` classes
    pub fn canonical_name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Yaml => "YAML",
            LanguageId::Markdown => "Markdown",
            LanguageId::Rust => "Rust",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Tsx => "TSX",
            LanguageId::Json => "JSON",
            LanguageId::Toml => "TOML",
            LanguageId::Python => "Python",
            LanguageId::Go => "Go",
            LanguageId::Php => "PHP",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::Java => "Java",
            LanguageId::Bash => "Bash",
            LanguageId::CSharp => "C#",
            LanguageId::Kotlin => "Kotlin",
            LanguageId::Ruby => "Ruby",
            LanguageId::Swift => "Swift",
            LanguageId::Scala => "Scala",
            LanguageId::Groovy => "Groovy",
            LanguageId::Lua => "Lua",
            LanguageId::Elixir => "Elixir",
            LanguageId::Elm => "Elm",
            LanguageId::OCaml => "OCaml",
            LanguageId::Scheme => "Scheme",
            LanguageId::Ini => "INI",
            LanguageId::Xml => "XML",
            LanguageId::Hcl => "HCL",
            LanguageId::Protobuf => "Protocol Buffers",
            LanguageId::Sql => "SQL",
            LanguageId::Svelte => "Svelte",
        }
    }

    /// Load the tree-sitter grammar
    pub fn grammar(&self) -> Language {
        match self {
            LanguageId::Yaml => tree_sitter_yaml::language(),
            LanguageId::Markdown => tree_sitter_md::LANGUAGE.into(),
            LanguageId::Rust => tree_sitter_rust::LANGUAGE.into(),
            LanguageId::Html => tree_sitter_html::LANGUAGE.into(),
            LanguageId::Css => tree_sitter_css::LANGUAGE.into(),
            LanguageId::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            LanguageId::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            LanguageId::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            LanguageId::Json => tree_sitter_json::LANGUAGE.into(),
            LanguageId::Toml => tree_sitter_toml_ng::LANGUAGE.into(),
            LanguageId::Python => tree_sitter_python::LANGUAGE.into(),
            LanguageId::Go => tree_sitter_go::LANGUAGE.into(),
            LanguageId::Php => tree_sitter_php::LANGUAGE_PHP.into(),
            LanguageId::C => tree_sitter_c::LANGUAGE.into(),
            LanguageId::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            LanguageId::Java => tree_sitter_java::LANGUAGE.into(),
            LanguageId::Bash => tree_sitter_bash::LANGUAGE.into(),
            LanguageId::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            LanguageId::Kotlin => tree_sitter_kotlin_ng::LANGUAGE.into(),
            LanguageId::Ruby => tree_sitter_ruby::LANGUAGE.into(),
            LanguageId::Swift => tree_sitter_swift::LANGUAGE.into(),
            LanguageId::Scala => tree_sitter_scala::LANGUAGE.into(),
            LanguageId::Groovy => tree_sitter_groovy::LANGUAGE.into(),
            LanguageId::Lua => tree_sitter_lua::LANGUAGE.into(),
            LanguageId::Elixir => tree_sitter_elixir::LANGUAGE.into(),
            LanguageId::Elm => tree_sitter_elm::LANGUAGE.into(),
            LanguageId::OCaml => tree_sitter_ocaml::LANGUAGE_OCAML.into(),
            LanguageId::Scheme => tree_sitter_racket::LANGUAGE.into(),
            LanguageId::Ini => tree_sitter_ini::LANGUAGE.into(),
            LanguageId::Xml => tree_sitter_xml::LANGUAGE_XML.into(),
            LanguageId::Hcl => tree_sitter_hcl::LANGUAGE.into(),
            LanguageId::Protobuf => tree_sitter_proto::LANGUAGE.into(),
            LanguageId::Sql => tree_sitter_sequel::LANGUAGE.into(),
            LanguageId::Svelte => tree_sitter_svelte_ng::LANGUAGE.into(),
        }
    }
}
