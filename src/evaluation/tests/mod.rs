mod mobility_tests;
