pub mod enrich_testkit;
