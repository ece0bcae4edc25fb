// Insight landing page - Leptos 0.8 edition
// Developed by XplnHUB (c)2025

fn main() {
    insight_landing::start();
}
