//! Print the digest to put in `ADMIN_PASSWORD` for a given password.
//!
//! Usage: `HASH_SALT=... hash_password <password>`

use std::env;

use theater_server::auth::hash;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let password = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: hash_password <password>"))?;
    let salt = env::var("HASH_SALT").unwrap_or_default();

    println!("{}", hash(&password, &salt));
    Ok(())
}
