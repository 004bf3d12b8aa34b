//! Repository layout checks: every source file has a mirrored unit test file
