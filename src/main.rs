//! Demo host: mounts the app against an in-memory history environment and
//! walks through a navigation sequence, printing each rendered page.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mixfinder::router::MemoryEnvironment;
use mixfinder::{Theme, mount};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let env = Arc::new(MemoryEnvironment::new());
	let app = mount(env.clone())?;

	println!("theme: {}", serde_json::to_string_pretty(&Theme::default())?);

	println!("-- initial route --\n{}", app.render().render_html());

	app.router().push("/cocktail/7")?;
	println!("-- after push /cocktail/7 --\n{}", app.render().render_html());

	env.back();
	println!("-- after browser back --\n{}", app.render().render_html());

	env.forward();
	println!("-- after browser forward --\n{}", app.render().render_html());

	// A stale bookmark: the mismatch is logged, the view stays put.
	if app.router().replace("/no-such-page").is_err() {
		println!("-- replace to unknown path left us on --");
		println!("{}", app.router().current_path().get());
	}

	Ok(())
}
