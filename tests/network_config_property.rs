// tests/network_config_property.rs

use std::collections::HashSet;

use proptest::prelude::*;

use dlt_launcher::config::{LaunchConfig, RegionConfig};
use dlt_launcher::launch::{build_launch_request, start_distributed_load_test};
use dlt_launcher::types::RunId;
use dlt_launcher_test_utils::builders::stack_outputs_for;
use dlt_launcher_test_utils::fake_cloud::FakeCloudBackend;

fn region_name() -> impl Strategy<Value = String> {
    "[a-z]{2}-[a-z]{4,9}-[1-9]"
}

proptest! {
    #[test]
    fn request_has_one_security_group_and_three_subnets(
        region in region_name(),
        count in 1u32..=10,
    ) {
        let cfg = RegionConfig::new(region.clone(), "dlt-fargate", count);
        let outputs = stack_outputs_for(&region);
        let run_id = RunId::generate();

        let request = build_launch_request(&cfg, &outputs, &run_id).unwrap();

        prop_assert_eq!(request.count, count);
        prop_assert_eq!(request.network.security_groups.len(), 1);
        prop_assert_eq!(request.network.subnets.len(), 3);
        prop_assert_eq!(&request.started_by, &run_id.to_string());
        prop_assert_eq!(&request.group, &run_id.to_string());
    }

    #[test]
    fn no_identifier_leaks_across_regions(
        regions in proptest::collection::hash_set(region_name(), 1..5),
    ) {
        let cfg = LaunchConfig {
            region: regions
                .iter()
                .map(|name| RegionConfig::new(name.clone(), "dlt-fargate", 2))
                .collect(),
        };
        let mut backend = FakeCloudBackend::new();
        let mut out: Vec<u8> = Vec::new();

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let outcome = rt
            .block_on(start_distributed_load_test(&cfg, &mut backend, &mut out))
            .unwrap();
        prop_assert!(outcome.is_completed());

        let requests = backend.run_requests();
        prop_assert_eq!(requests.len(), regions.len());

        let mut seen_run_ids = HashSet::new();
        for (region, request) in requests {
            let own = stack_outputs_for(&region);
            prop_assert_eq!(
                request.network.security_groups,
                vec![own.get("TaskSecurityGroup").unwrap().to_string()]
            );
            let own_subnets: Vec<String> = ["SubnetA", "SubnetB", "SubnetC"]
                .iter()
                .map(|k| own.get(k).unwrap().to_string())
                .collect();
            prop_assert_eq!(request.network.subnets, own_subnets);
            prop_assert_eq!(request.cluster.as_str(), own.get("FargateClusterName").unwrap());
            seen_run_ids.insert(request.started_by);
        }
        prop_assert_eq!(seen_run_ids.len(), 1);
    }
}
