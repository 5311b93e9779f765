pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const DATABASE: &str = "🗄️";
    pub const PIN: &str = "📌";
}
