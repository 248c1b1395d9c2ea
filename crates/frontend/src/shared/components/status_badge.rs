use leptos::prelude::*;

/// Badge colour for the status, priority and reason labels shown in lists.
pub fn badge_variant(label: &str) -> &'static str {
    match label {
        "Active" | "Published" | "Sent" => "success",
        "Pending" | "Scheduled" | "Medium" => "warning",
        "High" | "Account Reactivation" => "error",
        "New Registration" => "primary",
        _ => "neutral",
    }
}

#[component]
pub fn StatusBadge(label: &'static str) -> impl IntoView {
    let class = format!("badge badge--{}", badge_variant(label));
    view! { <span class=class>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants() {
        assert_eq!(badge_variant("Active"), "success");
        assert_eq!(badge_variant("Scheduled"), "warning");
        assert_eq!(badge_variant("Expired"), "neutral");
        assert_eq!(badge_variant("Draft"), "neutral");
        assert_eq!(badge_variant("High"), "error");
    }
}
