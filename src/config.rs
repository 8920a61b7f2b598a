#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    "http://localhost:54321"  // Local Supabase stack when developing
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    "https://YOUR_PROJECT.supabase.co"  // Production project URL
}

// The anon key only grants what row level security allows; inserts into the
// registrations table are the single permitted write.
#[cfg(debug_assertions)]
pub fn get_supabase_anon_key() -> &'static str {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.local-anon-key"
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_anon_key() -> &'static str {
    "YOUR_PRODUCTION_ANON_KEY"
}

pub fn get_whatsapp_group_url() -> &'static str {
    "https://chat.whatsapp.com/YOUR_GROUP_INVITE_LINK"
}
