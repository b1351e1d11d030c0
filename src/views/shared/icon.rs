use yew::prelude::*;

/// Glifo para cada nombre de icono usado en la app
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "TrendingUp" => "📈",
        "BarChart3" => "📊",
        "Search" => "🔍",
        "Shield" => "🛡️",
        "User" => "👤",
        "LogOut" => "🚪",
        "LogIn" => "🔑",
        "UserPlus" => "➕",
        "Menu" => "☰",
        "X" => "✕",
        "Settings" => "⚙️",
        "HelpCircle" => "❓",
        "Lock" => "🔒",
        "RefreshCw" => "🔄",
        "Loader2" => "⏳",
        "ChevronRight" => "›",
        "Route" => "🧭",
        "Building2" => "🏢",
        "AlertTriangle" => "⚠️",
        "Info" => "ℹ️",
        "Globe" => "🌐",
        _ => "•",
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true" data-icon={props.name.clone()}>
            { icon_glyph(&props.name) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_bullet() {
        assert_eq!(icon_glyph("Menu"), "☰");
        assert_eq!(icon_glyph("DoesNotExist"), "•");
    }
}
