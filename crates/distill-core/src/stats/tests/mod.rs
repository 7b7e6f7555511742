mod tests_stats;
