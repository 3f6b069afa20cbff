use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, keyboard::PhysicalKey, window::WindowBuilder};

use echo_core::{EchoConfig, EchoError, EchoSession, ProximityTier, Quad, RADAR_RING_SEGMENTS};

mod head;

use head::{HeadCommand, SimulatedHead};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    screen_size: [f32; 2],
    _pad: [f32; 2],
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    corner_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        instance_capacity: usize,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("radar shader"),
            source: wgpu::ShaderSource::Wgsl(echo_core::RADAR_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Unit square as two triangles; the shader scales it per instance
        let corners: [f32; 12] = [
            0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0,
        ];
        let corner_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("corner_vb"),
            contents: bytemuck::cast_slice(&corners),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = create_instance_buffer(&device, instance_capacity);
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: unit square corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: one Quad per instance
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Quad>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 8,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("radar pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            corner_vb,
            instance_vb,
            instance_capacity,
            bind_group,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, quads: &[Quad]) -> Result<(), wgpu::SurfaceError> {
        if quads.len() > self.instance_capacity {
            self.instance_capacity = quads.len().next_power_of_two();
            self.instance_vb = create_instance_buffer(&self.device, self.instance_capacity);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                screen_size: [self.width as f32, self.height as f32],
                _pad: [0.0; 2],
            }),
        );
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(quads));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.05,
                            g: 0.06,
                            b: 0.08,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.corner_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..quads.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<Quad>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Session plus the host-side bookkeeping around it.
struct Scene {
    session: EchoSession,
    head: SimulatedHead,
    last_tiers: Vec<Option<ProximityTier>>,
    next_seed: u64,
}

impl Scene {
    fn new(config: EchoConfig, seed: u64) -> anyhow::Result<Self> {
        let session = EchoSession::initialize(config, seed)?;
        let head = SimulatedHead::new(session.config().volume.center());
        log::info!(
            "spawned {} targets; max distance {} m",
            session.targets().len(),
            session.config().max_distance
        );
        Ok(Self {
            last_tiers: vec![None; session.targets().len()],
            session,
            head,
            next_seed: seed.wrapping_add(1),
        })
    }

    fn retarget(&mut self) -> anyhow::Result<()> {
        self.session.retarget(self.next_seed)?;
        self.next_seed = self.next_seed.wrapping_add(1);
        self.last_tiers = vec![None; self.session.targets().len()];
        log::info!("resampled {} targets", self.session.targets().len());
        Ok(())
    }

    /// Attach outlines queued on an earlier frame.
    fn materialize_pending(&mut self) -> anyhow::Result<()> {
        for id in self.session.pending_visuals() {
            let outline = self.session.materialize_visual(id)?;
            log::debug!(
                "outline {} ready at {}",
                outline.target_index,
                outline.center
            );
        }
        Ok(())
    }

    /// Evaluate the frame and build overlay quads for a screen `screen_height` tall.
    fn frame(&mut self, dt_sec: f32, screen_height: f32) -> anyhow::Result<Vec<Quad>> {
        self.head.update(dt_sec);
        let layout = self.session.layout(screen_height);
        let snapshot = self.head.snapshot();
        match self.session.evaluate_frame(snapshot.as_ref()) {
            Ok(report) => {
                for outline in self.session.outlines() {
                    let idx = outline.target_index;
                    if self.last_tiers[idx] != outline.tier {
                        if let Some(tier) = outline.tier {
                            log::debug!("outline {idx} -> {}", tier.color_name());
                        }
                        self.last_tiers[idx] = outline.tier;
                    }
                }
                Ok(layout.compose(report.projections()))
            }
            // Skipped frames still show an empty radar.
            Err(EchoError::MissingInput(_)) => Ok(layout.compose(std::iter::empty())),
            Err(e) => Err(e.into()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = EchoConfig::default();
    let capacity = 1 + 4 * RADAR_RING_SEGMENTS + 2 + config.number_of_points;
    let mut scene = Scene::new(config, 42)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Echolocation radar (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, capacity))?;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: key_state,
                            repeat,
                            ..
                        },
                    ..
                },
            ..
        } => {
            let pressed = key_state == ElementState::Pressed;
            if let Some(HeadCommand::Retarget) = scene.head.handle_key(code, pressed, repeat) {
                if let Err(e) = scene.retarget() {
                    log::error!("retarget failed: {e:#}");
                }
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f32();
            last_frame = now;

            // Outlines created last frame get their material now.
            if let Err(e) = scene.materialize_pending() {
                log::error!("materialize failed: {e:#}");
            }
            let quads = match scene.frame(dt_sec, state.height as f32) {
                Ok(quads) => quads,
                Err(e) => {
                    log::error!("frame failed: {e:#}");
                    elwt.exit();
                    return;
                }
            };
            match state.render(&quads) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
