mod tests_jvm;
mod tests_markup;
mod tests_script;
mod tests_style;
