mod exam;
