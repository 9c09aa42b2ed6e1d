use anyhow::Context;
use codetidy_cli::walk_tool_main;
use codetidy_config::Config;
use codetidy_engine::add_import_in_dir;

fn main() {
    walk_tool_main("add-import", |project_dir, config| {
        let rule = config.imports.rule().with_context(|| {
            format!(
                "Invalid [imports] trigger in {}",
                Config::config_path().display()
            )
        })?;

        let changed = add_import_in_dir(project_dir, &config.extension, &rule)?;
        for path in changed {
            println!("Added import to {}", path.display());
        }
        Ok(())
    });
}
