mod outdated_bindings;
mod template;
