mod reasoning_properties;
