use codetidy_cli::walk_tool_main;
use codetidy_engine::replace_params_in_dir;

fn main() {
    walk_tool_main("replace-params", |project_dir, config| {
        let changed = replace_params_in_dir(project_dir, &config.extension, &config.params.helper)?;
        for path in changed {
            println!("Replaced occurrences in {}", path.display());
        }
        Ok(())
    });
}
