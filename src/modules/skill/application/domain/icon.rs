use serde::Serialize;
use utoipa::ToSchema;

/// Icon identifier handed to the rendering client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SkillIcon {
    React,
    Vue,
    Angular,
    Next,
    Laravel,
    Node,
    Express,
    Server,
    Postgresql,
    Mongodb,
    Mysql,
    Redis,
    Javascript,
    Typescript,
    Python,
    Java,
    Php,
    Go,
    Rust,
    Cplusplus,
    C,
    Html5,
    Css3,
    Tailwind,
    Bootstrap,
    Git,
    Github,
    Canva,
    VsCode,
    Docker,
    Linkedin,
    Instagram,
    Envelope,
    Postman,
    Graphql,
    Figma,
    Palette,
    Code,
    Database,
    Tools,
    Image,
    Flutter,
    Cloud,
    Mobile,
    Cogs,
}

impl SkillIcon {
    pub const FALLBACK: SkillIcon = SkillIcon::Code;
}

// Partial matching walks this table top to bottom, so order is significant.
const NAME_ICONS: &[(&str, SkillIcon)] = &[
    // Frontend
    ("react", SkillIcon::React),
    ("react.js", SkillIcon::React),
    ("reactjs", SkillIcon::React),
    ("vue", SkillIcon::Vue),
    ("vue.js", SkillIcon::Vue),
    ("vuejs", SkillIcon::Vue),
    ("angular", SkillIcon::Angular),
    ("next", SkillIcon::Next),
    ("next.js", SkillIcon::Next),
    ("nextjs", SkillIcon::Next),
    ("laravel", SkillIcon::Laravel),
    // Backend
    ("node", SkillIcon::Node),
    ("node.js", SkillIcon::Node),
    ("nodejs", SkillIcon::Node),
    ("express", SkillIcon::Express),
    ("express.js", SkillIcon::Express),
    ("expressjs", SkillIcon::Express),
    ("hapi", SkillIcon::Server),
    ("hapi.js", SkillIcon::Server),
    ("hapijs", SkillIcon::Server),
    // Database
    ("postgresql", SkillIcon::Postgresql),
    ("postgres", SkillIcon::Postgresql),
    ("mongodb", SkillIcon::Mongodb),
    ("mongo", SkillIcon::Mongodb),
    ("mysql", SkillIcon::Mysql),
    ("redis", SkillIcon::Redis),
    // Languages
    ("javascript", SkillIcon::Javascript),
    ("js", SkillIcon::Javascript),
    ("typescript", SkillIcon::Typescript),
    ("ts", SkillIcon::Typescript),
    ("python", SkillIcon::Python),
    ("java", SkillIcon::Java),
    ("php", SkillIcon::Php),
    ("go", SkillIcon::Go),
    ("golang", SkillIcon::Go),
    ("rust", SkillIcon::Rust),
    ("c++", SkillIcon::Cplusplus),
    ("cpp", SkillIcon::Cplusplus),
    ("c", SkillIcon::C),
    // Markup and styling
    ("html", SkillIcon::Html5),
    ("html5", SkillIcon::Html5),
    ("html/css", SkillIcon::Html5),
    ("css", SkillIcon::Css3),
    ("css3", SkillIcon::Css3),
    ("tailwind", SkillIcon::Tailwind),
    ("tailwindcss", SkillIcon::Tailwind),
    ("bootstrap", SkillIcon::Bootstrap),
    // Tools
    ("git", SkillIcon::Git),
    ("github", SkillIcon::Github),
    ("canva", SkillIcon::Canva),
    ("visual studio code", SkillIcon::VsCode),
    ("visualstudiocode", SkillIcon::VsCode),
    ("vs code", SkillIcon::VsCode),
    ("vscode", SkillIcon::VsCode),
    ("docker", SkillIcon::Docker),
    ("linkedin", SkillIcon::Linkedin),
    ("instagram", SkillIcon::Instagram),
    ("email", SkillIcon::Envelope),
    ("postman", SkillIcon::Postman),
    // API
    ("graphql", SkillIcon::Graphql),
    ("rest", SkillIcon::Server),
    ("api", SkillIcon::Server),
    // Design
    ("figma", SkillIcon::Figma),
    ("palette", SkillIcon::Palette),
    ("paint", SkillIcon::Palette),
    ("brush", SkillIcon::Palette),
    // Services
    ("code", SkillIcon::Code),
    ("database", SkillIcon::Database),
    ("lightbulb", SkillIcon::Tools),
    ("image", SkillIcon::Image),
    ("photo", SkillIcon::Image),
    ("gallery", SkillIcon::Image),
    // Mobile
    ("flutter", SkillIcon::Flutter),
    // Cloud
    ("aws", SkillIcon::Cloud),
    ("amazon", SkillIcon::Cloud),
    ("cloud", SkillIcon::Cloud),
];

const CATEGORY_ICONS: &[(&str, SkillIcon)] = &[
    ("frontend", SkillIcon::Code),
    ("backend", SkillIcon::Server),
    ("database", SkillIcon::Database),
    ("programming", SkillIcon::Code),
    ("tools", SkillIcon::Tools),
    ("design", SkillIcon::Palette),
    ("mobile", SkillIcon::Mobile),
    ("cloud", SkillIcon::Cloud),
    ("devops", SkillIcon::Cogs),
];

fn lookup(table: &[(&str, SkillIcon)], key: &str) -> Option<SkillIcon> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, icon)| *icon)
}

/// Icon for a skill, service or social platform name.
///
/// Resolution order: exact key, then the first key in table order that
/// contains or is contained by the name, then the category default, then
/// [`SkillIcon::FALLBACK`]. Whitespace-only names count as empty.
pub fn resolve_icon(name: &str, category: &str) -> SkillIcon {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return SkillIcon::FALLBACK;
    }

    if let Some(icon) = lookup(NAME_ICONS, &name) {
        return icon;
    }

    let partial = NAME_ICONS
        .iter()
        .find(|(key, _)| name.contains(key) || key.contains(name.as_str()));
    if let Some((_, icon)) = partial {
        return *icon;
    }

    let category = category.trim().to_lowercase();
    lookup(CATEGORY_ICONS, &category).unwrap_or(SkillIcon::FALLBACK)
}

/// Sorted, de-duplicated list of recognised icon keys.
pub fn available_icon_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = NAME_ICONS.iter().map(|(key, _)| *key).collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}
