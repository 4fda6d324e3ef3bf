mod walk_control_tests;
