mod to_thrift;
