//! Generic button primitive.

use leptos::*;

/// Visual size of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact button
    Small,
    /// Regular button
    #[default]
    Medium,
    /// Prominent button (hero call-to-actions)
    Large,
}

impl ButtonSize {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Visual variant of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, high-emphasis button
    #[default]
    Primary,
    /// Outlined, low-emphasis button
    Outline,
}

impl ButtonVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[component]
pub fn Button(
    /// Visual size, defaults to [`ButtonSize::Medium`].
    #[prop(optional)]
    size: ButtonSize,
    /// Visual variant, defaults to [`ButtonVariant::Primary`].
    #[prop(optional)]
    variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    let class = format!("btn {} {}", size.css_class(), variant.css_class());

    view! {
        <button class=class>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_mapping() {
        assert_eq!(ButtonSize::Large.css_class(), "btn-lg");
        assert_eq!(ButtonSize::default().css_class(), "btn-md");
        assert_eq!(ButtonVariant::Primary.css_class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.css_class(), "btn-outline");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
