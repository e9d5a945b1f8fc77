mod exam_configuration;
mod time_limits;
